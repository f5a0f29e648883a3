use crate::result::RectboxResult;
use tracing::Level;

pub fn init_logging() -> RectboxResult<()> {
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|error| crate::err!("Failed to install tracing subscriber: {}", error))?;
    Ok(())
}
