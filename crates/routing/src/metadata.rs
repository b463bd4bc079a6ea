//! Metadata Join: decorating asset lists with ledger metadata and balances

use futures::future::{join_all, try_join_all};
use ledger_client::LedgerQuery;
use serde::{Deserialize, Serialize};
use swapgraph_core::{Address, AssetId, AssetMetadata, ResolverError, ZERO_BALANCE};

/// An asset joined with its metadata and, optionally, a holder's position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenWithMetadata {
    pub asset_id: AssetId,
    pub metadata: AssetMetadata,
    /// Holder balance in base units; "0" when no holder was given
    pub balance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Fetch metadata (and holder position) for one asset.
///
/// Metadata and holding lookups run concurrently.
pub async fn lookup_asset(
    ledger: &dyn LedgerQuery,
    asset_id: AssetId,
    address: Option<&Address>,
) -> Result<TokenWithMetadata, ResolverError> {
    let holding = async {
        match address {
            Some(address) => ledger.query_account_holding(asset_id, address).await,
            None => Ok(None),
        }
    };

    let (metadata, holding) =
        tokio::try_join!(ledger.query_asset_metadata(asset_id), holding)?;

    let metadata = metadata.ok_or(ResolverError::MetadataNotFound { asset_id })?;

    Ok(match holding {
        Some(holding) => TokenWithMetadata {
            asset_id,
            metadata,
            balance: holding.balance,
            creator: holding.creator,
            status: holding.status,
        },
        None => TokenWithMetadata {
            asset_id,
            metadata,
            balance: ZERO_BALANCE.to_string(),
            creator: None,
            status: None,
        },
    })
}

/// Join metadata onto every asset, in input order.
///
/// All lookups are issued before any is awaited. The first failure fails
/// the whole batch.
pub async fn join_metadata(
    ledger: &dyn LedgerQuery,
    assets: &[AssetId],
    address: Option<&Address>,
) -> Result<Vec<TokenWithMetadata>, ResolverError> {
    let joined = try_join_all(
        assets
            .iter()
            .map(|asset_id| lookup_asset(ledger, *asset_id, address)),
    )
    .await?;

    tracing::debug!(assets = joined.len(), "Joined asset metadata");
    Ok(joined)
}

/// Join metadata onto every asset, reporting each lookup separately.
///
/// Same fan-out as [`join_metadata`], but a failed lookup only fails its
/// own slot.
pub async fn join_metadata_settled(
    ledger: &dyn LedgerQuery,
    assets: &[AssetId],
    address: Option<&Address>,
) -> Vec<Result<TokenWithMetadata, ResolverError>> {
    let results = join_all(
        assets
            .iter()
            .map(|asset_id| lookup_asset(ledger, *asset_id, address)),
    )
    .await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = results.len(), "Some metadata lookups failed");
    }
    results
}
