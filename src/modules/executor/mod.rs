//! 逐项执行移除/禁用操作
//!
//! 单项失败只记录在该项的结果中，不会中断整批操作。

pub mod models;

use std::fmt::Display;

pub use models::{BatchSummary, ExecutionOutcome};

/// 对每个目标执行 `action`，按输入顺序返回每一项的结果
pub fn execute<T, E, F>(targets: impl IntoIterator<Item = T>, mut action: F) -> Vec<ExecutionOutcome<T>>
where
    T: Display,
    E: Display,
    F: FnMut(&T) -> Result<(), E>,
{
    let mut outcomes = Vec::new();

    for target in targets {
        match action(&target) {
            Ok(()) => {
                tracing::info!("已处理: {}", target);
                outcomes.push(ExecutionOutcome {
                    item: target,
                    succeeded: true,
                    error: None,
                });
            }
            Err(e) => {
                tracing::warn!("处理失败 {}: {}", target, e);
                outcomes.push(ExecutionOutcome {
                    item: target,
                    succeeded: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    outcomes
}

/// 预览模式: 不执行操作，全部记为成功
pub fn dry_run<T: Display>(targets: impl IntoIterator<Item = T>) -> Vec<ExecutionOutcome<T>> {
    targets
        .into_iter()
        .map(|target| {
            tracing::info!("[预览] 将处理: {}", target);
            ExecutionOutcome {
                item: target,
                succeeded: true,
                error: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::error::TuneError;

    #[test]
    fn failure_in_the_middle_does_not_stop_the_batch() {
        let mut attempted = Vec::new();
        let outcomes = execute(vec!["a", "b", "c"], |item| {
            attempted.push(item.to_string());
            if *item == "b" {
                Err(TuneError::PermissionDenied("AccessDenied".to_string()))
            } else {
                Ok(())
            }
        });

        assert_eq!(attempted, vec!["a", "b", "c"]);
        assert_eq!(
            outcomes.iter().map(|o| o.succeeded).collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert!(outcomes[1].error.as_deref().unwrap().contains("AccessDenied"));
        assert_eq!(
            BatchSummary::from_outcomes(&outcomes),
            BatchSummary { succeeded: 2, failed: 1 }
        );
    }

    #[test]
    fn every_target_is_attempted_regardless_of_failure_positions() {
        let n = 9;
        for (i, j) in [(0, 8), (0, 1), (4, 5), (7, 8)] {
            let mut calls = 0;
            let outcomes = execute((0..n).map(|k| k.to_string()), |item: &String| {
                calls += 1;
                let k: usize = item.parse().unwrap();
                if k == i || k == j {
                    Err(format!("boom {}", k))
                } else {
                    Ok(())
                }
            });

            assert_eq!(calls, n);
            assert_eq!(outcomes.len(), n);
            let failed: Vec<usize> = outcomes
                .iter()
                .enumerate()
                .filter(|(_, o)| !o.succeeded)
                .map(|(k, _)| k)
                .collect();
            assert_eq!(failed, vec![i, j]);
            assert_eq!(outcomes[i].item, i.to_string());
        }
    }

    #[test]
    fn empty_batch_summarises_to_zero() {
        let outcomes = execute(Vec::<String>::new(), |_: &String| Ok::<(), String>(()));
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total(), 0);
        assert!(!summary.all_failed());
    }

    #[test]
    fn dry_run_marks_everything_succeeded_without_acting() {
        let outcomes = dry_run(vec!["x", "y"]);
        assert!(outcomes.iter().all(|o| o.succeeded && o.error.is_none()));
    }
}
