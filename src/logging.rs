use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact `fmt` subscriber as the global default.
///
/// Library code only emits `tracing` events; nothing is printed until a
/// binary calls this.
pub fn init_logging(max_level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(max_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
