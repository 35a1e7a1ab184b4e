//! Writing the action catalogue out as text, one UCI move per line.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::action_space::action_catalogue::ActionCatalogue;

/// Write every action in catalogue order, newline-terminated.
pub fn write_actions<W: Write>(catalogue: &ActionCatalogue, writer: &mut W) -> io::Result<()> {
    for action in catalogue.actions() {
        writeln!(writer, "{action}")?;
    }
    Ok(())
}

/// Export the standard catalogue to `path` and return the number of lines
/// written. An existing file is only replaced when `allow_overwrite` is set;
/// otherwise the call fails with `ErrorKind::AlreadyExists`.
pub fn export_actions(path: &Path, allow_overwrite: bool) -> io::Result<usize> {
    let mut options = OpenOptions::new();
    options.write(true);
    if allow_overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let catalogue = ActionCatalogue::standard();
    let mut writer = BufWriter::new(options.open(path)?);
    write_actions(catalogue, &mut writer)?;
    writer.flush()?;
    Ok(catalogue.action_space_size())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::{export_actions, write_actions};
    use crate::action_space::action_catalogue::ActionCatalogue;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chess_action_space_{}_{name}", std::process::id()))
    }

    #[test]
    fn writes_one_line_per_action() {
        let mut out = Vec::new();
        write_actions(ActionCatalogue::standard(), &mut out).expect("writing to memory succeeds");
        let text = String::from_utf8(out).expect("output is UTF-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1924);
        assert_eq!(lines[0], "a1b1");
        assert!(lines.contains(&"e7e8n"));
        assert!(!text.contains('q'));
    }

    #[test]
    fn export_refuses_to_overwrite() {
        let path = scratch_path("refuse.txt");
        let _ = fs::remove_file(&path);

        assert_eq!(export_actions(&path, false).expect("fresh export succeeds"), 1924);
        let err = export_actions(&path, false).expect_err("second export must not overwrite");
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);

        fs::write(&path, "stale").expect("scratch file is writable");
        export_actions(&path, true).expect("overwrite is allowed");
        let text = fs::read_to_string(&path).expect("export is readable");
        assert_eq!(text.lines().count(), 1924);

        fs::remove_file(&path).expect("scratch file is removable");
    }
}
