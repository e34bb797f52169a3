//! Mode state reducer.
//!
//! Every action is accepted; there is no terminal or error state. A view mode
//! switch carries the feature and detail changes that belong to it, so the
//! host dispatches one action instead of four.

use serde::{Deserialize, Serialize};
use view_scaling::{DetailLevel, DisplayMode, ScalingTable, ViewMode, ViewModeScaling};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::features::{Feature, FeatureFlags};

/// Catalog the host is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DataSource {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// State transitions accepted by [`ModeState::reduce`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ModeAction {
    SetMode(DisplayMode),
    SetViewMode(ViewMode),
    ToggleFeature(Feature),
    SetDataSource(Option<DataSource>),
    /// Adopt the detail level preferred by a view mode
    OptimizeRendering(ViewMode),
    SetDetailLevel(DetailLevel),
    Reset,
}

/// Detail level the renderer should use for a view mode
pub fn optimize_rendering(view_mode: ViewMode) -> DetailLevel {
    view_mode.preferred_detail()
}

/// Immutable snapshot of the view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ModeState {
    pub mode: DisplayMode,
    pub view_mode: ViewMode,
    pub features: FeatureFlags,
    pub data_source: Option<DataSource>,
    pub detail_level: DetailLevel,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Realistic,
            view_mode: ViewMode::Explorational,
            features: FeatureFlags::default(),
            data_source: None,
            detail_level: DetailLevel::Medium,
        }
    }
}

impl ModeState {
    pub fn initial() -> Self {
        Self::default()
    }

    /// Applies `action`, returning the next state.
    ///
    /// # Examples
    /// ```
    /// use view_scaling::{DetailLevel, ViewMode};
    /// use view_state::{ModeAction, ModeState};
    ///
    /// let state = ModeState::initial().reduce(&ModeAction::SetViewMode(ViewMode::Profile));
    /// assert!(!state.features.scientific_info);
    /// assert!(state.features.game_info);
    /// assert_eq!(state.detail_level, DetailLevel::Low);
    /// ```
    pub fn reduce(&self, action: &ModeAction) -> ModeState {
        match action {
            ModeAction::SetMode(mode) => ModeState {
                mode: *mode,
                ..self.clone()
            },
            ModeAction::SetViewMode(view_mode) => self.switch_view(*view_mode),
            ModeAction::ToggleFeature(feature) => ModeState {
                features: self.features.toggled(*feature),
                ..self.clone()
            },
            ModeAction::SetDataSource(source) => ModeState {
                data_source: source.clone(),
                ..self.clone()
            },
            ModeAction::OptimizeRendering(view_mode) => ModeState {
                detail_level: optimize_rendering(*view_mode),
                ..self.clone()
            },
            ModeAction::SetDetailLevel(level) => ModeState {
                detail_level: *level,
                ..self.clone()
            },
            ModeAction::Reset => ModeState::initial(),
        }
    }

    fn switch_view(&self, view_mode: ViewMode) -> ModeState {
        let features = match view_mode {
            ViewMode::Explorational => FeatureFlags::default(),
            ViewMode::Navigational => self
                .features
                .with(Feature::ScientificInfo, false)
                .with(Feature::JumpPointInfo, true),
            ViewMode::Profile => self
                .features
                .with(Feature::ScientificInfo, false)
                .with(Feature::GameInfo, true),
        };

        log::debug!("view mode {} -> {view_mode}", self.view_mode);

        ModeState {
            view_mode,
            features,
            detail_level: optimize_rendering(view_mode),
            ..self.clone()
        }
    }

    /// Scaling record for the active view mode
    pub fn scaling<'a>(&self, table: &'a ScalingTable) -> &'a ViewModeScaling {
        table.get(self.view_mode)
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.features.get(feature)
    }
}
