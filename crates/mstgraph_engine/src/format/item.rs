//! Item formatting.

use mstgraph_foundation::{RecordId, Result};
use mstgraph_storage::record::MstItem;
use serde::Serialize;

use super::traits::{NiceTrait, traits};
use crate::forward::Forward;

/// An inventory item.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceItem {
    /// Item ID.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Description.
    pub detail: String,
    /// Upstream item type code.
    #[serde(rename = "type")]
    pub item_type: i32,
    /// Icon ID.
    pub icon_id: i64,
    /// Background code.
    pub background: i32,
    /// Traits the item carries.
    pub individuality: Vec<NiceTrait>,
    /// Display order.
    pub priority: i64,
    /// Drop display order.
    pub drop_priority: i64,
    /// Event the item belongs to, or zero.
    pub event_id: i64,
}

impl From<&MstItem> for NiceItem {
    fn from(item: &MstItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            detail: item.detail.clone(),
            item_type: item.item_type,
            icon_id: item.image_id,
            background: item.bg_image_id,
            individuality: traits(&item.individuality),
            priority: item.priority,
            drop_priority: item.drop_priority,
            event_id: item.event_id,
        }
    }
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceItem>> {
    Ok(ctx.store().item(id).map(|item| NiceItem::from(item.as_ref())))
}
