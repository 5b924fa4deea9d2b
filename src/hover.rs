use crate::record::Record;

/// Last pointer observation over the map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    pub x: f64,
    pub y: f64,
    pub object: Option<Record>,
}

/// Replaces the previous state wholesale.
pub fn on_hover(_previous: HoverState, x: f64, y: f64, object: Option<Record>) -> HoverState {
    HoverState { x, y, object }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let quake = Record {
            timestamp: 1,
            longitude: 2.0,
            latitude: 3.0,
            depth: 4.0,
            magnitude: 5.0,
        };
        let first = on_hover(HoverState::default(), 10.0, 20.0, Some(quake));
        let second = on_hover(first, 30.0, 40.0, None);
        assert_eq!(second,
                   HoverState {
                       x: 30.0,
                       y: 40.0,
                       object: None,
                   });
    }
}
