//! Serde record representations for mapping lists.
//!
//! A mapping list persists as an ordered sequence of records, destination
//! before source. Code points are uppercase hex strings without a prefix,
//! zero-padded to 4 digits inside the BMP and unpadded above it. Conversion
//! back to mappings is tolerant: a malformed code point defaults to
//! unassigned with a warning, while an unknown icon set or match quality is
//! a per-record error and only skips that record.

use log::warn;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use iconcat::{Icon, IconSet};

use crate::{
    error::RecordError,
    list::MappingList,
    mapping::{IconMapping, MatchQuality},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub destination: IconRecord,
    pub source: IconRecord,
    pub glyph_match_quality: SmolStr,
    pub metaphor_match_quality: SmolStr,
    #[serde(default)]
    pub is_placeholder: bool,
    #[serde(default)]
    pub comments: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub icon_set: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_point: Option<String>,
    pub name: String,
}

pub(crate) fn format_code_point(code_point: u32) -> Option<String> {
    match code_point {
        0 => None,
        cp if cp <= 0xFFFF => Some(format!("{cp:04X}")),
        cp => Some(format!("{cp:X}")),
    }
}

fn parse_code_point(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    match u32::from_str_radix(raw.trim(), 16) {
        Ok(cp) => cp,
        Err(_) => {
            warn!("malformed code point '{raw}', treating as unassigned");
            0
        }
    }
}

impl From<&Icon> for IconRecord {
    fn from(icon: &Icon) -> Self {
        IconRecord {
            icon_set: icon.icon_set.as_str().into(),
            code_point: format_code_point(icon.code_point),
            name: icon.name.to_string(),
        }
    }
}

impl IconRecord {
    fn into_icon(self) -> Result<Icon, RecordError> {
        let icon_set: IconSet = self
            .icon_set
            .parse()
            .map_err(|_| RecordError::UnknownIconSet(self.icon_set.clone()))?;
        Ok(Icon {
            icon_set,
            name: self.name.into(),
            code_point: parse_code_point(self.code_point.as_deref()),
        })
    }
}

impl From<&IconMapping> for MappingRecord {
    fn from(mapping: &IconMapping) -> Self {
        MappingRecord {
            destination: (&mapping.destination).into(),
            source: (&mapping.source).into(),
            glyph_match_quality: mapping.glyph_match_quality.as_str().into(),
            metaphor_match_quality: mapping.metaphor_match_quality.as_str().into(),
            is_placeholder: mapping.is_placeholder,
            comments: mapping.comments.clone(),
        }
    }
}

impl MappingRecord {
    pub fn into_mapping(self) -> Result<IconMapping, RecordError> {
        let parse_quality = |raw: SmolStr| -> Result<MatchQuality, RecordError> {
            raw.parse().map_err(RecordError::UnknownMatchQuality)
        };
        Ok(IconMapping {
            destination: self.destination.into_icon()?,
            source: self.source.into_icon()?,
            glyph_match_quality: parse_quality(self.glyph_match_quality)?,
            metaphor_match_quality: parse_quality(self.metaphor_match_quality)?,
            is_placeholder: self.is_placeholder,
            comments: self.comments,
        })
    }
}

impl MappingList {
    pub fn to_records(&self) -> Vec<MappingRecord> {
        self.iter().map(MappingRecord::from).collect()
    }

    /// Convert records back into a list, collecting per-record errors.
    ///
    /// Bad records are skipped; the caller gets their index and reason and
    /// decides whether the remainder is usable.
    pub fn from_records(
        records: Vec<MappingRecord>,
    ) -> (MappingList, Vec<(usize, RecordError)>) {
        let mut list = MappingList::new();
        let mut errors = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match record.into_mapping() {
                Ok(mapping) => list.push(mapping),
                Err(error) => errors.push((index, error)),
            }
        }
        (list, errors)
    }
}
