use anyhow::{Context, Result};
use hello_bbdemo::{render, BannerConfig, ProcessIdentity};
use std::env;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    let args: Vec<_> = env::args_os().skip(1).collect();
    let identity = ProcessIdentity::current()?;
    let config = BannerConfig::default();

    let mut out = BufWriter::new(io::stdout().lock());
    render(&mut out, &config, &args, &identity).context("写入标准输出失败")?;
    out.flush().context("刷新标准输出失败")?;
    Ok(())
}
