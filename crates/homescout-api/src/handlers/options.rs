use std::sync::Arc;

use axum::{extract::State, Json};
use homescout_core::insights::title_case;
use homescout_core::models::{AREA_RANGE, BHK_RANGE};

use crate::dto::{Bounds, HouseTypeOption, OptionsResponse};
use crate::state::AppState;

pub async fn get_options(State(state): State<Arc<AppState>>) -> Json<OptionsResponse> {
    let layout = state.predictor.layout();

    Json(OptionsResponse {
        locations: layout.locations().iter().map(|l| title_case(l)).collect(),
        house_types: layout
            .house_types()
            .iter()
            .map(|ht| HouseTypeOption {
                value: ht.column_name().replace(' ', "_"),
                label: ht.display_name().to_string(),
            })
            .collect(),
        area_sqft: Bounds {
            min: *AREA_RANGE.start(),
            max: *AREA_RANGE.end(),
            default: 1000,
            step: 50,
        },
        bhk: Bounds {
            min: *BHK_RANGE.start(),
            max: *BHK_RANGE.end(),
            default: 2,
            step: 1,
        },
    })
}
