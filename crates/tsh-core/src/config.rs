use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{chunking::LimitPolicy, errors::Error, Result};

/// Typed configuration, read from the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    // Telegram
    pub api_token: String,

    // Login
    pub password: String,

    // Shell
    pub bash_path: PathBuf,

    // Telegram limits
    pub message_limit: usize,
    pub messages_count: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // Required env vars
        let api_token = env_str("TELESHELL_API_TOKEN").unwrap_or_default();
        let password = env_str("TELESHELL_PASSWORD").unwrap_or_default();

        if api_token.trim().is_empty() {
            return Err(Error::Config(
                "TELESHELL_API_TOKEN environment variable is required".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(Error::Config(
                "TELESHELL_PASSWORD environment variable is required".to_string(),
            ));
        }

        let bash_path = env_path("TELESHELL_BASH_PATH")
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("/bin/bash"));

        // Telegram message limits
        let message_limit = env_usize("TELESHELL_MESSAGE_LIMIT").unwrap_or(4096);
        let messages_count = env_usize("TELESHELL_MESSAGES_COUNT").unwrap_or(10);

        let cfg = Self {
            api_token,
            password,
            bash_path,
            message_limit,
            messages_count,
        };
        // Fail at startup rather than on the first command.
        cfg.limits()?;
        Ok(cfg)
    }

    /// Chunking limits for one command reply.
    pub fn limits(&self) -> Result<LimitPolicy> {
        LimitPolicy::new(self.message_limit, self.messages_count)
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| parse_usize(&s))
}

fn parse_usize(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_skips_comments_and_strips_quotes() {
        let parsed = parse_dotenv(
            "# token\nTELESHELL_API_TOKEN=\"123:abc\"\n\nTELESHELL_PASSWORD='s3cret'\nbroken line\n =x\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("TELESHELL_API_TOKEN".to_string(), "123:abc".to_string()),
                ("TELESHELL_PASSWORD".to_string(), "s3cret".to_string()),
            ]
        );
    }

    #[test]
    fn parses_limits_with_whitespace() {
        assert_eq!(parse_usize(" 4096 "), Some(4096));
        assert_eq!(parse_usize("-1"), None);
        assert_eq!(parse_usize("lots"), None);
    }

    #[test]
    fn limits_come_from_config() {
        let cfg = Config {
            api_token: "x".to_string(),
            password: "p".to_string(),
            bash_path: "/bin/bash".into(),
            message_limit: 4096,
            messages_count: 10,
        };
        let limits = cfg.limits().unwrap();
        assert_eq!(limits.max_chunk_length(), 4096);
        assert_eq!(limits.max_chunk_count(), 10);

        let bad = Config {
            messages_count: 0,
            ..cfg
        };
        assert!(matches!(bad.limits(), Err(Error::InvalidLimits(_))));
    }
}
