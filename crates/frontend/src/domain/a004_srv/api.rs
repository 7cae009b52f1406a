use crate::routes::paths::api_collection_path;
use crate::shared::api_utils::get_json;
use contracts::domain::a004_srv::aggregate::{Srv, SrvStats};
use contracts::domain::common::EntityKind;
use std::future::Future;

/// Fetch all SRVs
pub async fn list_srvs() -> Result<Vec<Srv>, String> {
    get_json(&api_collection_path(EntityKind::Srv)).await
}

/// Fetch aggregate SRV statistics
pub async fn get_srv_stats() -> Result<SrvStats, String> {
    get_json(&format!("{}/stats", api_collection_path(EntityKind::Srv))).await
}

/// Data of the SRV page. Never an error: whatever failed is empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SrvPageProps {
    pub srvs: Vec<Srv>,
    pub stats: Option<SrvStats>,
}

/// Fold the two fetch results into page props, logging failures.
pub fn settle_page_props(
    srvs: Result<Vec<Srv>, String>,
    stats: Result<SrvStats, String>,
) -> SrvPageProps {
    let srvs = srvs.unwrap_or_else(|e| {
        log::warn!("SRV list unavailable, showing empty list: {}", e);
        Vec::new()
    });
    let stats = match stats {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::warn!("SRV stats unavailable: {}", e);
            None
        }
    };
    SrvPageProps { srvs, stats }
}

/// Run both fetches concurrently and settle them.
pub async fn load_page_props_with<L, S>(list: L, stats: S) -> SrvPageProps
where
    L: Future<Output = Result<Vec<Srv>, String>>,
    S: Future<Output = Result<SrvStats, String>>,
{
    let (srvs, stats) = futures::join!(list, stats);
    settle_page_props(srvs, stats)
}

pub async fn load_page_props() -> SrvPageProps {
    load_page_props_with(list_srvs(), get_srv_stats()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn srv(number: &str) -> Srv {
        Srv {
            srv_number: number.to_string(),
            srv_date: "2024-04-10".to_string(),
            po_number: "4500012345".to_string(),
            received_qty: 10.0,
            rejected_qty: 1.0,
            invoice_number: None,
        }
    }

    fn stats() -> SrvStats {
        SrvStats {
            total_srvs: 1,
            total_received_qty: 10.0,
            total_rejected_qty: 1.0,
            rejection_rate: 10.0,
        }
    }

    #[test]
    fn test_both_failures_fall_back_to_empty() {
        let props = block_on(load_page_props_with(
            async { Err::<Vec<Srv>, String>("connection refused".to_string()) },
            async { Err::<SrvStats, String>("connection refused".to_string()) },
        ));
        assert_eq!(props, SrvPageProps { srvs: vec![], stats: None });
    }

    #[test]
    fn test_partial_failure_keeps_the_other_half() {
        let props = block_on(load_page_props_with(
            async { Ok::<Vec<Srv>, String>(vec![srv("SRV-1")]) },
            async { Err::<SrvStats, String>("Server error: 500".to_string()) },
        ));
        assert_eq!(props.srvs.len(), 1);
        assert_eq!(props.stats, None);

        let props = block_on(load_page_props_with(
            async { Err::<Vec<Srv>, String>("Server error: 502".to_string()) },
            async { Ok::<SrvStats, String>(stats()) },
        ));
        assert!(props.srvs.is_empty());
        assert_eq!(props.stats, Some(stats()));
    }
}
