use super::csv_export::{to_bytes, write_contributions, write_locations, write_places};
use crate::{
    application::browse::{dto::FilterSpec, use_case::BrowseUseCase},
    domain::shared::errors::DomainError,
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Places,
    Contributions,
    Locations,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Places => "places",
            Self::Contributions => "contributions",
            Self::Locations => "locations",
        }
    }

    /// `<kind>_<YYYYmmdd>.csv`
    pub fn file_name(&self, now: DateTime<Utc>) -> String {
        format!("{}_{}.csv", self.as_str(), now.format("%Y%m%d"))
    }
}

#[derive(Debug)]
pub struct CsvExport {
    pub file_name: String,
    pub body: Vec<u8>,
    pub rows: usize,
}

pub struct ExportUseCase {
    browse: BrowseUseCase,
}

impl ExportUseCase {
    pub fn new(browse: BrowseUseCase) -> Self {
        Self { browse }
    }

    /// Serialises the filtered record set for `kind`. The filter's category
    /// applies to places and contributions separately, so locations use
    /// text and date criteria only.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        kind: ExportKind,
        spec: &FilterSpec,
        now: DateTime<Utc>,
    ) -> Result<CsvExport, DomainError> {
        let (body, rows) = match kind {
            ExportKind::Places => {
                let places = self.browse.places(spec, now).await;
                (to_bytes(|w| write_places(&places, w))?, places.len())
            }
            ExportKind::Contributions => {
                let contributions = self.browse.contributions(spec, now).await;
                (to_bytes(|w| write_contributions(&contributions, w))?, contributions.len())
            }
            ExportKind::Locations => {
                let spec = FilterSpec {
                    category: None,
                    contributor: None,
                    ..spec.clone()
                };
                let places = self.browse.places(&spec, now).await;
                let contributions = self.browse.contributions(&spec, now).await;
                (
                    to_bytes(|w| write_locations(&places, &contributions, w))?,
                    places.len() + contributions.len(),
                )
            }
        };

        info!(kind = kind.as_str(), rows, bytes = body.len(), "CSV export generated");
        Ok(CsvExport {
            file_name: kind.file_name(now),
            body,
            rows,
        })
    }
}
