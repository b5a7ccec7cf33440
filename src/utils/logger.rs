/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::utils::config::get_env_or_default;
use tracing::Level;

/// Initializes the global tracing subscriber
///
/// The maximum level is read from the `FLIX_LOG` environment variable
/// (default: `info`). Calling this more than once is harmless; only the
/// first initialization takes effect.
pub fn setup_logger() {
    let level = get_env_or_default("FLIX_LOG", Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
