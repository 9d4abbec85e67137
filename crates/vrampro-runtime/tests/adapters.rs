//! Adapter tests against the live host and the dry-run workflow path.

use std::sync::Arc;

use sysinfo::Disks;
use vrampro_core::ports::{ProbeResult, SystemProbePort};
use vrampro_core::{
    ProvisionSettings, RebootOutcome, WorkflowCoordinator, WorkflowDeps, find_option,
};
use vrampro_runtime::{DefaultSystemProbe, DryRunFacility, DryRunRestart};

#[test]
fn listed_mounts_resolve_through_probe() {
    let disks = Disks::new_with_refreshed_list();
    let Some(disk) = disks.list().first() else {
        // Containers may expose no block devices
        return;
    };
    let mount = disk.mount_point().to_string_lossy().into_owned();

    let probe = DefaultSystemProbe::new();
    assert!(probe.disk_free(&mount).is_ok(), "mount {mount} should resolve");
}

struct RoomyProbe;

impl SystemProbePort for RoomyProbe {
    fn memory_total(&self) -> ProbeResult<u64> {
        Ok(8 << 30)
    }

    fn disk_free(&self, _volume: &str) -> ProbeResult<u64> {
        Ok(500 << 30)
    }
}

#[tokio::test]
async fn dry_run_workflow_issues_expected_scripts() {
    let facility = Arc::new(DryRunFacility::new());
    let deps = WorkflowDeps {
        probe: Arc::new(RoomyProbe),
        facility: facility.clone(),
        restart: Arc::new(DryRunRestart),
    };
    let settings = ProvisionSettings::default().with_target_volume("D:");
    let mut workflow = WorkflowCoordinator::new(deps, &settings);
    let option = find_option(&settings.capacity_options, "64GB").unwrap().clone();

    assert!(workflow.run_preparation().await.is_success());
    assert!(workflow.run_allocation(&option).await.requires_reboot());
    assert_eq!(
        workflow.confirm_reboot(true).await,
        RebootOutcome::Requested { delay_secs: 1 }
    );

    let issued = facility.issued();
    assert_eq!(issued.len(), 3);
    assert!(issued[2].contains("Name='D:\\pagefile.sys'"));
    assert!(issued[2].contains("InitialSize=65536; MaximumSize=65536"));
}
