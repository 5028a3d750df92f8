//! Desktop notifications through notify-send, when the host has it.

use std::process::{Command, Stdio};

use log::{debug, info, warn};

/// Whether desktop notifications can be raised on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// No notify-send binary reachable on PATH.
    Unsupported,
    /// The user opted out.
    Denied,
    /// Sends will be attempted.
    Granted,
}

pub struct Notifier {
    capability: Capability,
}

impl Notifier {
    /// Probes the host once, at startup. `enabled` is false when the user
    /// opted out, which wins over whatever the host supports.
    pub fn probe(enabled: bool) -> Notifier {
        let capability = if !enabled {
            Capability::Denied
        } else if notify_send_available() {
            Capability::Granted
        } else {
            Capability::Unsupported
        };
        info!("notification capability: {:?}", capability);
        Notifier { capability }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Fire and forget. `tag` lets notification servers that honor stack
    /// tags replace an earlier notification of the same kind rather than
    /// pile up a new one.
    pub fn send(&self, title: &str, body: &str, tag: &str) {
        if self.capability != Capability::Granted {
            debug!("notification suppressed ({:?}): {}", self.capability, body);
            return;
        }
        let result = Command::new("notify-send")
            .args(["--app-name", "meteo"])
            .args(["--hint", &format!("string:x-dunst-stack-tag:{tag}")])
            .arg(title)
            .arg(body)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match result {
            Ok(_) => debug!("notification sent: {}", body),
            Err(e) => warn!("notify-send failed to spawn: {}", e),
        }
    }
}

fn notify_send_available() -> bool {
    Command::new("notify-send")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
