use serde::Serialize;

use crate::modules::classifier::{Classification, Classifier};
use crate::modules::common::config::AppConfig;
use crate::modules::common::error::TuneError;
use crate::modules::common::prompt::Confirm;
use crate::modules::executor::{self, BatchSummary, ExecutionOutcome};
use crate::modules::planner::{Mode, RemovalPlanner};
use crate::modules::system::Host;

#[derive(Debug, Clone, Serialize)]
pub struct BloatwareReport {
    pub classification: Classification,
    pub outcomes: Vec<ExecutionOutcome>,
}

impl BloatwareReport {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_outcomes(&self.outcomes)
    }
}

/// 分类已安装应用包并按模式卸载
pub fn remove_bloatware(
    host: &dyn Host,
    config: &AppConfig,
    mode: Mode,
    confirm: &mut dyn Confirm,
    dry_run: bool,
) -> Result<BloatwareReport, TuneError> {
    let inventory = host.installed_packages()?;
    let classification = Classifier::for_domain(&config.packages).classify(inventory);

    let plan = RemovalPlanner::new(&config.packages.protected).plan(&classification, mode, confirm);
    tracing::info!("应用包计划 ({}): {} 项", mode, plan.targets.len());

    let outcomes = if dry_run {
        executor::dry_run(plan.targets)
    } else {
        executor::execute(plan.targets, |target| host.remove_package(&target.item))
    };

    Ok(BloatwareReport {
        classification,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::prompt::PresetConfirm;
    use crate::modules::maintenance::fake::FakeHost;

    #[test]
    fn junk_plus_chosen_removes_junk_and_confirmed_optional_only() {
        let host = FakeHost::with_packages(&[
            "Microsoft.WindowsStore",
            "Microsoft.BingNews",
            "king.com.CandyCrushSaga",
            "Microsoft.XboxGamingOverlay",
            "Microsoft.YourPhone",
            "Contoso.Widget",
        ]);

        let report = remove_bloatware(
            &host,
            &AppConfig::default(),
            Mode::JunkPlusChosen,
            &mut PresetConfirm::new(["手机连接"]),
            false,
        )
        .unwrap();

        assert_eq!(
            host.removed(),
            vec![
                "Microsoft.BingNews".to_string(),
                "king.com.CandyCrushSaga".to_string(),
                "Microsoft.YourPhone".to_string()
            ]
        );
        assert_eq!(report.summary().failed, 0);
        assert_eq!(report.classification.unknown.len(), 1);
    }

    #[test]
    fn package_listing_failure_propagates() {
        let host = FakeHost::default();
        host.fail_inventory();

        let result = remove_bloatware(
            &host,
            &AppConfig::default(),
            Mode::JunkOnly,
            &mut PresetConfirm::default(),
            false,
        );
        assert!(result.is_err());
    }
}
