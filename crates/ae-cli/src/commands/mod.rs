pub mod chat;
pub mod config;
pub mod init;
pub mod roll;
pub mod table;

use std::path::Path;

use crate::host::Host;

/// Open the data directory, turning host errors into CLI messages.
fn open_host(dir: &Path) -> Result<Host, String> {
    Host::open(dir)
}
