use crate::location::{Location, Position};

/// True when any of the 8 neighbouring tiles holds a mature, standing tree.
pub fn is_shaded(location: &dyn Location, position: Position) -> bool {
    position
        .surrounding()
        .into_iter()
        .filter_map(|neighbour| location.feature_at(neighbour))
        .any(|feature| feature.casts_shade())
}
