use std::process::Command;

use clap::ValueEnum;

use crate::output;

const LOCATE_DAEMON: &str = "/System/Library/LaunchDaemons/com.apple.locate.plist";

/// The macOS periodic maintenance schedules.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

/// Run `periodic` for the given schedule and, on success, reload the locate
/// daemon so its index catches up. The reload failing is only a warning.
pub fn run(period: Period) {
    output::print_status(&format!("Running {} maintenance...", period.as_str()));
    println!("Running scripts in: /usr/libexec/periodic/{}", period.as_str());

    let result = Command::new("sudo")
        .args(["periodic", period.as_str()])
        .output();

    let out = match result {
        Ok(out) => out,
        Err(e) => {
            output::print_warning(&format!("cannot run periodic: {e}"));
            return;
        }
    };

    let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&out.stderr));

    if !out.status.success() {
        output::print_warning(&format!("periodic {} failed ({})", period.as_str(), out.status));
        if !combined.trim().is_empty() {
            println!("Output:\n{combined}");
        }
        return;
    }

    output::print_done(&format!(
        "Maintenance {} completed successfully!",
        period.as_str()
    ));
    if !combined.trim().is_empty() {
        println!("Output:\n{combined}");
    }

    println!("Rebuilding locate cache...");
    let reload = Command::new("sudo")
        .args(["launchctl", "load", "-w", LOCATE_DAEMON])
        .status();
    match reload {
        Ok(status) if status.success() => println!("Locate cache rebuilt"),
        Ok(status) => {
            output::print_warning(&format!("cannot rebuild locate cache ({status})"))
        }
        Err(e) => output::print_warning(&format!("cannot rebuild locate cache: {e}")),
    }
}
