/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default() {
        let value: u64 = get_env_or_default("FLIX_TEST_MISSING_VAR", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn present_variable_is_parsed() {
        unsafe { env::set_var("FLIX_TEST_TIMEOUT", "7") };
        let value: u64 = get_env_or_default("FLIX_TEST_TIMEOUT", 30);
        assert_eq!(value, 7);
        unsafe { env::remove_var("FLIX_TEST_TIMEOUT") };
    }

    #[test]
    fn unparsable_variable_uses_default() {
        unsafe { env::set_var("FLIX_TEST_BAD_TIMEOUT", "not-a-number") };
        let value: u64 = get_env_or_default("FLIX_TEST_BAD_TIMEOUT", 30);
        assert_eq!(value, 30);
        unsafe { env::remove_var("FLIX_TEST_BAD_TIMEOUT") };
    }
}
