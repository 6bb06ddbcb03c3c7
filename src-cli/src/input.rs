//! Reading template and report inputs.

use mailprobe_core::{MailprobeError, Result};
use std::io::Read;
use std::path::Path;

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reject argument lists that ask for stdin more than once.
pub fn ensure_single_stdin(paths: &[&Path]) -> Result<()> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(MailprobeError::Validation(
            "only one input may be read from stdin".to_string(),
        ));
    }
    Ok(())
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
