//! Service layer - applet orchestration
//!
//! Services wrap the pure domain functions with input validation, session
//! state and configuration. Each service backs one applet, plus logging.

mod cipher;
pub mod logging;
pub mod rps;
mod table;

pub use cipher::{CipherOutcome, CipherRequest, CipherService};
pub use logging::{AppletActivity, EntryPoint, LogEntry, LogEvent, LogFilter, LoggingService};
pub use rps::{Phase, Player, RoundOutcome, RpsService};
pub use table::{GeneratedTable, TableService};
