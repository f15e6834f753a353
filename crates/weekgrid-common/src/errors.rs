use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read sessions from {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse sessions: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WeekgridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("grid.end_hour = 30 is out of range [1, 24]".into());
        assert_eq!(
            err.to_string(),
            "config validation error: grid.end_hour = 30 is out of range [1, 24]"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn input_error_display() {
        let err = InputError::Read {
            path: PathBuf::from("/tmp/courses.json"),
            reason: "permission denied".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read sessions from /tmp/courses.json: permission denied"
        );

        let err = InputError::Parse("expected `[` at line 1".into());
        assert_eq!(
            err.to_string(),
            "failed to parse sessions: expected `[` at line 1"
        );
    }

    #[test]
    fn weekgrid_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: WeekgridError = config_err.into();
        assert!(matches!(err, WeekgridError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn weekgrid_error_from_input() {
        let input_err = InputError::Parse("trailing comma".into());
        let err: WeekgridError = input_err.into();
        assert!(matches!(err, WeekgridError::Input(_)));
        assert!(err.to_string().contains("trailing comma"));
    }

    #[test]
    fn weekgrid_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WeekgridError = io_err.into();
        assert!(matches!(err, WeekgridError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn weekgrid_error_other() {
        let err = WeekgridError::Other("start_hour must be before end_hour".into());
        assert_eq!(err.to_string(), "start_hour must be before end_hour");
    }
}
