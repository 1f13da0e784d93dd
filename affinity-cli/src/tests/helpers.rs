//! Test helpers for dataset files and stub recommenders.

use std::fs;

use affinity_core::test_support::correlated_dataset;
use affinity_core::{Dataset, RecommendError, RecommendRequest, RecommendationRecord, Recommender};
use affinity_data::write_dataset;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::CliError;
use crate::recommend::RecommenderBuilder;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary workspace holding the correlated five-product dataset.
pub(super) struct DatasetFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl DatasetFile {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("dataset.json");
        write_dataset(&path, &correlated_dataset()).expect("write dataset fixture");
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Recommender returning a fixed outcome regardless of the request.
struct StubRecommender {
    outcome: Result<Vec<RecommendationRecord>, RecommendError>,
}

impl Recommender for StubRecommender {
    fn recommend(
        &self,
        _request: &RecommendRequest,
    ) -> Result<Vec<RecommendationRecord>, RecommendError> {
        self.outcome.clone()
    }
}

/// Builder handing out [`StubRecommender`]s.
pub(super) struct StubRecommenderBuilder {
    pub(super) outcome: Result<Vec<RecommendationRecord>, RecommendError>,
}

impl RecommenderBuilder for StubRecommenderBuilder {
    fn build(&self, _dataset: Dataset) -> Result<Box<dyn Recommender>, CliError> {
        Ok(Box::new(StubRecommender {
            outcome: self.outcome.clone(),
        }))
    }
}
