//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gatehouse_core` linkage.
//! - Drive one scripted session against local sources for quick local
//!   sanity checks.

use gatehouse_core::{PortalConfig, PortalView, Session};
use std::env;

fn main() {
    println!("gatehouse_core ping={}", gatehouse_core::ping());
    println!("gatehouse_core version={}", gatehouse_core::core_version());

    let mut args = env::args().skip(1);
    let schedule_path = args.next().unwrap_or_else(|| "schedule.csv".to_string());
    let members_path = args.next().unwrap_or_else(|| "members.csv".to_string());

    let config = PortalConfig::new(
        "gatehouse",
        schedule_path,
        members_path,
        "submission_records",
    );
    let mut session = Session::open(config);
    session.ensure_data_loaded();

    session.toggle_view(PortalView::Members);
    println!(
        "schedule rows={} members rows={}",
        session.schedule().row_count(),
        session.members_count()
    );
}
