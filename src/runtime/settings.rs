use crate::config;

pub fn load_settings() -> config::Settings {
    validated_or_default(config::Settings::load())
}

/// Config is optional; an unloadable or invalid config falls back to
/// defaults instead of preventing the app from starting.
fn validated_or_default(
    loaded: Result<config::Settings, ::config::ConfigError>,
) -> config::Settings {
    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("quicktune: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("quicktune: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_settings_pass_through() {
        let mut s = config::Settings::default();
        s.controls.seek_seconds = 9;
        assert_eq!(validated_or_default(Ok(s)).controls.seek_seconds, 9);
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        let mut s = config::Settings::default();
        s.controls.seek_seconds = 0;

        let settled = validated_or_default(Ok(s));
        assert_eq!(settled.controls.seek_seconds, 5);
        assert_eq!(settled.generation.delay_ms, 2000);
    }

    #[test]
    fn load_errors_fall_back_to_defaults() {
        let err = ::config::ConfigError::Message("boom".to_string());
        let settled = validated_or_default(Err(err));
        assert_eq!(settled.generation.assets_dir, "assets");
    }
}
