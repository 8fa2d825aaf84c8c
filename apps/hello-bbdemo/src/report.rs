use anyhow::Result;
use std::ffi::OsStr;
use std::io::Write;

use crate::config::BannerConfig;
use crate::identity::ProcessIdentity;

/// Writes the banner, the echoed arguments (if any) and the identity block.
pub fn render<W, A>(
    out: &mut W,
    config: &BannerConfig,
    args: &[A],
    identity: &ProcessIdentity,
) -> Result<()>
where
    W: Write,
    A: AsRef<OsStr>,
{
    writeln!(out, "{}", config.greeting)?;
    writeln!(out, "{}", config.description)?;

    if !args.is_empty() {
        out.write_all(config.args_label.as_bytes())?;
        for arg in args {
            write_token(out, arg.as_ref())?;
            out.write_all(b" ")?;
        }
        out.write_all(b"\n")?;
    }

    writeln!(out, "{}", config.system_header)?;
    writeln!(out, "  PID: {}", identity.pid)?;
    writeln!(out, "  UID: {}", identity.uid)?;
    Ok(())
}

#[cfg(unix)]
fn write_token<W: Write>(out: &mut W, token: &OsStr) -> Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(token.as_bytes())?;
    Ok(())
}

#[cfg(not(unix))]
fn write_token<W: Write>(out: &mut W, token: &OsStr) -> Result<()> {
    out.write_all(token.to_string_lossy().as_bytes())?;
    Ok(())
}
