use tracing::debug;

/// The two fixed locations of the map widget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MapLocation {
    #[default]
    Primary,
    Secondary,
}

impl MapLocation {
    pub const ALL: [MapLocation; 2] = [MapLocation::Primary, MapLocation::Secondary];
}

/// Local tab selection. Self-contained, it never talks to the view controller.
#[derive(Debug, Default)]
pub struct MapTabs {
    selected: MapLocation,
}

impl MapTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MapLocation {
        self.selected
    }

    pub fn select(&mut self, location: MapLocation) {
        if self.selected != location {
            debug!(?location, "Map tab selected");
        }
        self.selected = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_location() {
        assert_eq!(MapTabs::new().selected(), MapLocation::Primary);
        assert_eq!(MapLocation::ALL[0], MapLocation::Primary);
    }

    #[test]
    fn switches_deterministically() {
        let mut tabs = MapTabs::new();

        tabs.select(MapLocation::Secondary);
        assert_eq!(tabs.selected(), MapLocation::Secondary);

        tabs.select(MapLocation::Secondary);
        assert_eq!(tabs.selected(), MapLocation::Secondary);

        tabs.select(MapLocation::Primary);
        assert_eq!(tabs.selected(), MapLocation::Primary);
    }
}
