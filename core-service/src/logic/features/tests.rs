//! Integration Tests for Feature Derivation
//!
//! Builder output checked against the layout and the model's column contract.

#[cfg(test)]
mod integration_tests {
    use chrono::NaiveDate;

    use crate::logic::features::{
        build_features, validate_schema, RawInput, FEATURE_COUNT, FEATURE_LAYOUT,
    };

    fn summer_input() -> RawInput {
        RawInput {
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            avg_temp: 20.0,
            precipitation: 10.0,
            wind_speed: 10.0,
            kitchen_load: 2.0,
            laundry_load: 2.0,
            water_ac_load: 20.0,
        }
    }

    fn on(date: (i32, u32, u32)) -> RawInput {
        RawInput {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            ..summer_input()
        }
    }

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("feature present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    /// Reference submission from the original form defaults
    #[test]
    fn test_reference_summer_day() {
        let v = build_features(&summer_input());

        approx(v.get_by_name("Year"), 2024.0);
        approx(v.get_by_name("Month"), 7.0);
        approx(v.get_by_name("Day"), 15.0);
        approx(v.get_by_name("Is_Summer"), 1.0);
        approx(v.get_by_name("Is_Winter"), 0.0);
        approx(v.get_by_name("tmin"), 17.0);
        approx(v.get_by_name("tmax"), 23.0);
        approx(v.get_by_name("Global_intensity"), 24.0);
        approx(v.get_by_name("Lag_1"), 24.0);
        approx(v.get_by_name("Lag_60"), 22.8);
        approx(v.get_by_name("Temp_ActivePower"), 480.0);
    }

    #[test]
    fn test_constants_and_passthrough() {
        let v = build_features(&summer_input());

        approx(v.get_by_name("tavg"), 20.0);
        approx(v.get_by_name("prcp"), 10.0);
        approx(v.get_by_name("wspd"), 10.0);
        approx(v.get_by_name("wdir"), 180.0);
        approx(v.get_by_name("pres"), 1013.0);
        approx(v.get_by_name("Sub_metering_1"), 2.0);
        approx(v.get_by_name("Sub_metering_2"), 2.0);
        approx(v.get_by_name("Sub_metering_3"), 20.0);
        approx(v.get_by_name("Voltage"), 230.0);
        approx(v.get_by_name("Global_reactive_power"), 0.1);
    }

    /// Output columns are exactly the layout, which is what the model declares
    #[test]
    fn test_output_matches_schema() {
        let v = build_features(&summer_input());
        let names: Vec<&str> = v.iter().map(|(name, _)| name).collect();

        assert_eq!(names.len(), FEATURE_COUNT);
        assert_eq!(names, FEATURE_LAYOUT);
        assert!(validate_schema(&names).is_ok());
    }

    #[test]
    fn test_deterministic() {
        let a = build_features(&summer_input());
        let b = build_features(&summer_input());

        assert_eq!(a, b);
        let bits_a: Vec<u64> = a.as_slice().iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.as_slice().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_season_flags() {
        for month in 1..=12u32 {
            let v = build_features(&on((2023, month, 1)));
            let summer = v.get_by_name("Is_Summer").unwrap();
            let winter = v.get_by_name("Is_Winter").unwrap();

            match month {
                6 | 7 | 8 => assert_eq!((summer, winter), (1.0, 0.0), "month {month}"),
                12 | 1 | 2 => assert_eq!((summer, winter), (0.0, 1.0), "month {month}"),
                _ => assert_eq!((summer, winter), (0.0, 0.0), "month {month}"),
            }
        }
    }

    #[test]
    fn test_zero_load() {
        let raw = RawInput {
            kitchen_load: 0.0,
            laundry_load: 0.0,
            water_ac_load: 0.0,
            ..summer_input()
        };
        let v = build_features(&raw);

        approx(v.get_by_name("Global_intensity"), 0.0);
        approx(v.get_by_name("Lag_60"), 0.0);
        approx(v.get_by_name("Temp_ActivePower"), 0.0);
    }

    #[test]
    fn test_negative_temperature_interaction() {
        let raw = RawInput {
            date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            avg_temp: -5.0,
            ..summer_input()
        };
        let v = build_features(&raw);

        approx(v.get_by_name("tmin"), -8.0);
        approx(v.get_by_name("tmax"), -2.0);
        approx(v.get_by_name("Temp_ActivePower"), -120.0);
        approx(v.get_by_name("Is_Winter"), 1.0);
    }
}
