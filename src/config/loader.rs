//! Configuration loader with TOML parsing and environment overrides.

use super::schema::OrdenesConfig;
use crate::domain::errors::OrdenesError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file.
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`OrdenesConfig`]
/// 4. Applies `ORDENES_*` environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is unset, the TOML does not parse, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<OrdenesConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OrdenesError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OrdenesError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: OrdenesConfig = toml::from_str(&contents)
        .map_err(|e| OrdenesError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        OrdenesError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables written as `${VAR_NAME}`.
///
/// Comment lines are left untouched. Every missing variable is collected
/// so the error names all of them at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(OrdenesError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `ORDENES_*` overrides on top of the parsed file.
fn apply_env_overrides(config: &mut OrdenesConfig) -> Result<()> {
    if let Ok(level) = std::env::var("ORDENES_LOG_LEVEL") {
        config.application.log_level = level;
    }
    if let Ok(host) = std::env::var("ORDENES_SERVER_HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("ORDENES_SERVER_PORT") {
        config.server.port = port.parse().map_err(|_| {
            OrdenesError::Configuration(format!("ORDENES_SERVER_PORT is not a valid port: {port}"))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_replaces_known_variables() {
        std::env::set_var("ORDENES_TEST_SUBST_HOST", "127.0.0.1");
        let input = "[server]\nhost = \"${ORDENES_TEST_SUBST_HOST}\"\n";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("host = \"127.0.0.1\""));
        std::env::remove_var("ORDENES_TEST_SUBST_HOST");
    }

    #[test]
    fn substitution_skips_comment_lines() {
        let input = "# reference ${ORDENES_TEST_NOT_SET_ANYWHERE}\n[server]\n";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${ORDENES_TEST_NOT_SET_ANYWHERE}"));
    }

    #[test]
    fn substitution_reports_missing_variables() {
        let input = "host = \"${ORDENES_TEST_MISSING_VAR}\"\n";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("ORDENES_TEST_MISSING_VAR"));
    }
}
