use std::process::Stdio;

use anyhow::bail;
use anyhow::Result;
use tokio::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOpener {
    program: String,
    prefix_args: Vec<String>,
}

impl UrlOpener {
    pub fn system() -> Result<UrlOpener> {
        return UrlOpener::for_os(std::env::consts::OS);
    }

    pub fn for_os(target_os: &str) -> Result<UrlOpener> {
        match target_os {
            "macos" => Ok(UrlOpener {
                program: "open".to_string(),
                prefix_args: vec![],
            }),
            "linux" | "freebsd" | "openbsd" | "netbsd" => Ok(UrlOpener {
                program: "xdg-open".to_string(),
                prefix_args: vec![],
            }),
            // cmd's `start` would reparse `&` and `^` inside the URL.
            "windows" => Ok(UrlOpener {
                program: "rundll32".to_string(),
                prefix_args: vec!["url.dll,FileProtocolHandler".to_string()],
            }),
            _ => bail!("opening URLs is unsupported on {target_os}"),
        }
    }

    pub fn args_for_url(&self, url: &str) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.push(url.to_string());
        return args;
    }

    pub async fn open(&self, url: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .args(self.args_for_url(url))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;

        if !status.success() {
            bail!("{} exited with {status}", self.program);
        }

        return Ok(());
    }
}
