//! War, spot, and quest formatting.
//!
//! Spots and quests hold the foreign key, so inlining them under their
//! war goes through the relation index rather than the war record.

use mstgraph_foundation::{EntityKind, RecordId, Result};
use mstgraph_storage::EdgeKind;
use mstgraph_storage::record::{MstMap, MstQuest};
use serde::Serialize;

use crate::forward::{Expanded, Forward};

/// One map image of a war.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceMap {
    /// Map ID.
    pub id: RecordId,
    /// Image ID.
    pub map_image_id: i64,
    /// Image width.
    pub map_image_w: i32,
    /// Image height.
    pub map_image_h: i32,
    /// Header image ID.
    pub header_image_id: i64,
    /// Background music ID.
    pub bgm_id: i64,
}

impl From<&MstMap> for NiceMap {
    fn from(map: &MstMap) -> Self {
        Self {
            id: map.id,
            map_image_id: map.map_image_id,
            map_image_w: map.map_image_w,
            map_image_h: map.map_image_h,
            header_image_id: map.header_image_id,
            bgm_id: map.bgm_id,
        }
    }
}

/// A quest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceQuest {
    /// Quest ID.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Upstream quest type code.
    #[serde(rename = "type")]
    pub quest_type: i32,
    /// Upstream consume type code.
    pub consume_type: i32,
    /// AP cost.
    pub consume: i32,
    /// Spot the quest is at.
    pub spot_id: RecordId,
    /// War the spot is in, or zero if the spot is unknown.
    pub war_id: RecordId,
    /// Recommended level.
    pub recommend_lv: String,
    /// Display order.
    pub priority: i64,
    /// Announcement time.
    pub notice_at: i64,
    /// Open time.
    pub opened_at: i64,
    /// Close time.
    pub closed_at: i64,
}

/// A spot on a war map, with its quests.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceSpot {
    /// Spot ID.
    pub id: RecordId,
    /// Spots connected to this one.
    pub join_spot_ids: Vec<i64>,
    /// Map the spot is drawn on.
    pub map_id: i64,
    /// Display name.
    pub name: String,
    /// Image ID.
    pub image_id: i64,
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Quests at this spot, by priority.
    pub quests: Vec<Expanded<NiceQuest>>,
}

/// A war: a chapter or event map collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceWar {
    /// War ID.
    pub id: RecordId,
    /// Era label.
    pub age: String,
    /// Display name.
    pub name: String,
    /// Full name.
    pub long_name: String,
    /// Banner image ID.
    pub banner_id: i64,
    /// Header image ID.
    pub header_image_id: i64,
    /// Display order.
    pub priority: i64,
    /// Parent war, or zero.
    pub parent_war_id: i64,
    /// Event the war belongs to, or zero.
    pub event_id: i64,
    /// Quest that completes the war.
    pub last_quest_id: i64,
    /// Map images.
    pub maps: Vec<NiceMap>,
    /// Spots on the war's maps.
    pub spots: Vec<Expanded<NiceSpot>>,
}

fn nice_quest(quest: &MstQuest, war_id: RecordId) -> NiceQuest {
    NiceQuest {
        id: quest.id,
        name: quest.name.clone(),
        quest_type: quest.quest_type,
        consume_type: quest.consume_type,
        consume: quest.act_consume,
        spot_id: quest.spot_id,
        war_id,
        recommend_lv: quest.recommend_lv.clone(),
        priority: quest.priority,
        notice_at: quest.notice_at,
        opened_at: quest.opened_at,
        closed_at: quest.closed_at,
    }
}

pub(crate) fn format_quest(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceQuest>> {
    let store = ctx.store();
    Ok(store.quest(id).map(|quest| {
        let war_id = store.spot(quest.spot_id).map_or(0, |spot| spot.war_id);
        nice_quest(quest, war_id)
    }))
}

pub(crate) fn format_spot(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceSpot>> {
    let Some(spot) = ctx.store().spot(id) else {
        return Ok(None);
    };
    let mut quests = Vec::new();
    for &quest_id in ctx.index().lookup(EdgeKind::SpotQuest, id) {
        quests.extend(ctx.child(EntityKind::Quest.at(quest_id), format_quest)?);
    }
    Ok(Some(NiceSpot {
        id,
        join_spot_ids: spot.join_spot_ids.clone(),
        map_id: spot.map_id,
        name: spot.name.clone(),
        image_id: spot.image_id,
        x: spot.x,
        y: spot.y,
        quests,
    }))
}

pub(crate) fn format(ctx: &mut Forward<'_>, id: RecordId) -> Result<Option<NiceWar>> {
    let Some(record) = ctx.store().war(id) else {
        return Ok(None);
    };
    let war = &record.war;
    let mut spots = Vec::new();
    for &spot_id in ctx.index().lookup(EdgeKind::WarSpot, id) {
        spots.extend(ctx.child(EntityKind::Spot.at(spot_id), format_spot)?);
    }
    Ok(Some(NiceWar {
        id,
        age: war.age.clone(),
        name: war.name.clone(),
        long_name: war.long_name.clone(),
        banner_id: war.banner_id,
        header_image_id: war.header_image_id,
        priority: war.priority,
        parent_war_id: war.parent_war_id,
        event_id: war.event_id,
        last_quest_id: war.last_quest_id,
        maps: record.maps.iter().map(NiceMap::from).collect(),
        spots,
    }))
}
