//! Ship templates for authoring new catalog entries.
//!
//! A template is a fully shaped record with placeholder values, ready to be
//! edited and fed back through `import`. Faction presets adjust the stats
//! (and, for Federation ships, pick them by era).

use crate::model::Ship;
use serde_json::{json, Value};

pub const FEDERATION: &str = "Federation Starfleet";
pub const KLINGON: &str = "Klingon Empire";
pub const ROMULAN: &str = "Romulan Star Empire";

/// Scored stats in the order `hull, shields, weapons, speed, maneuver`.
type Scores = (f64, f64, f64, f64, f64);

pub struct ShipTemplate {
    ship: Ship,
}

impl ShipTemplate {
    /// Neutral defaults: every score 5, crew and length unknown (0), status "Active".
    pub fn basic(id: &str, name: &str, class: &str, affiliation: &str, era: &str) -> Self {
        let mut ship = Ship::new(id, name, class, affiliation, era);
        ship.set_detail("status", "Active");
        for (key, value) in [
            ("hull", json!(5)),
            ("shields", json!(5)),
            ("weapons", json!(5)),
            ("speed", json!(5)),
            ("maneuver", json!(5)),
            ("crew", json!(0)),
            ("length_m", json!(0)),
            ("width_m", json!(0)),
            ("height_m", json!(0)),
            ("decks", json!(0)),
            ("max_speed", json!("")),
        ] {
            ship.stats.set(key, value);
        }
        for (key, value) in [
            ("armaments", json!("")),
            ("defenses", json!("")),
            ("info", json!("")),
            ("history", json!("")),
            ("notable_features", json!([])),
            ("notable_missions", json!([])),
            ("captains", json!([])),
            ("gallery", json!([])),
        ] {
            ship.details.insert(key.to_string(), value);
        }
        Self { ship }
    }

    /// Federation ship with era-appropriate stats. Unknown eras keep the basic defaults.
    pub fn federation(id: &str, name: &str, class: &str, era: &str) -> Self {
        let template = Self::basic(id, name, class, FEDERATION, era);
        let preset = match era {
            "ENT" => Some((
                (4.0, 0.0, 4.0, 5.2, 7.0),
                "Polarized Hull Plating (no shields)",
                "3 Phase Cannons, 6 Plasma Torpedo Launchers, Grappling Hook",
            )),
            "TOS" => Some((
                (6.0, 6.0, 6.0, 8.0, 6.0),
                "Deflector Shields",
                "6 Phaser Banks, 2 Photon Torpedo Launchers",
            )),
            "TMP" => Some((
                (7.0, 7.0, 7.0, 8.0, 6.0),
                "Enhanced Deflector Shields",
                "18 Phaser Banks, 2 Photon Torpedo Launchers",
            )),
            "TNG" | "DS9" | "VOY" => Some((
                (8.0, 8.0, 8.0, 9.6, 6.0),
                "Regenerative Shields",
                "12 Type-10 Phaser Arrays, 3 Photon Torpedo Launchers (250+ torpedoes)",
            )),
            "TNG Films" => Some((
                (9.0, 9.0, 9.0, 9.985, 7.0),
                "Enhanced Regenerative Shields, Ablative Armor (later refits)",
                "16 Type-XII Phaser Arrays, 10 Torpedo Launchers (Quantum and Photon), Quantum Torpedoes",
            )),
            _ => None,
        };
        match preset {
            Some((scores, defenses, armaments)) => template
                .scores(scores)
                .detail("defenses", defenses)
                .detail("armaments", armaments),
            None => template,
        }
    }

    pub fn klingon(id: &str, name: &str, class: &str, era: &str) -> Self {
        Self::basic(id, name, class, KLINGON, era)
            .scores((5.0, 5.0, 8.0, 9.0, 9.0))
            .detail("defenses", "Standard Shields, Cloaking Device")
            .detail("armaments", "Disruptor Cannons (wing-mounted), Photon Torpedo Launcher")
    }

    pub fn romulan(id: &str, name: &str, class: &str, era: &str) -> Self {
        Self::basic(id, name, class, ROMULAN, era)
            .scores((9.0, 9.0, 8.0, 9.6, 3.0))
            .detail("defenses", "High-Capacity Shields, Cloaking Device")
            .detail("armaments", "Multiple Disruptor Arrays, Plasma Torpedo Launchers")
    }

    pub fn registry(mut self, registry: impl Into<String>) -> Self {
        self.ship = self.ship.with_registry(registry);
        self
    }

    fn scores(mut self, (hull, shields, weapons, speed, maneuver): Scores) -> Self {
        for (key, value) in [
            ("hull", hull),
            ("shields", shields),
            ("weapons", weapons),
            ("speed", speed),
            ("maneuver", maneuver),
        ] {
            self.ship.stats.set(key, number(value));
        }
        self
    }

    fn detail(mut self, key: &str, value: &str) -> Self {
        self.ship.set_detail(key, value);
        self
    }

    pub fn build(self) -> Ship {
        self.ship
    }
}

/// Whole numbers are stored as JSON integers so they print as `6`, not `6.0`.
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatValue;

    #[test]
    fn basic_template_has_neutral_stats() {
        let ship = ShipTemplate::basic("x", "New Ship", "Unknown", "Ferengi Alliance", "DS9").build();
        assert_eq!(ship.stats.number("hull"), Some(5.0));
        assert_eq!(ship.stats.number("crew"), Some(0.0));
        assert_eq!(ship.stats.get("max_speed"), StatValue::Text(String::new()));
        assert_eq!(ship.status(), Some("Active"));
        assert!(ship.registry().is_none());
    }

    #[test]
    fn federation_presets_follow_era() {
        let ent = ShipTemplate::federation("a", "A", "NX", "ENT").build();
        assert_eq!(ent.stats.number("shields"), Some(0.0));
        assert_eq!(ent.stats.number("speed"), Some(5.2));
        assert_eq!(ent.affiliation, FEDERATION);

        let films = ShipTemplate::federation("b", "B", "Sovereign", "TNG Films").build();
        assert_eq!(films.stats.number("speed"), Some(9.985));

        let unknown = ShipTemplate::federation("c", "C", "Akira", "Lower Decks").build();
        assert_eq!(unknown.stats.number("hull"), Some(5.0));
    }

    #[test]
    fn faction_presets() {
        let bop = ShipTemplate::klingon("k", "IKS Test", "B'rel", "DS9").build();
        assert_eq!(bop.stats.number("weapons"), Some(8.0));
        assert_eq!(bop.stats.number("maneuver"), Some(9.0));
        assert_eq!(bop.affiliation, KLINGON);

        let warbird = ShipTemplate::romulan("r", "IRW Test", "D'deridex", "TNG").build();
        assert_eq!(warbird.stats.number("maneuver"), Some(3.0));
        assert_eq!(warbird.stats.number("speed"), Some(9.6));
    }

    #[test]
    fn whole_scores_serialize_as_integers() {
        let ship = ShipTemplate::klingon("k", "K", "C", "DS9").registry("IKS-1").build();
        let json = serde_json::to_value(&ship).unwrap();
        assert_eq!(json["stats"]["hull"], serde_json::json!(5));
        assert_eq!(json["registry"], "IKS-1");
    }

    #[test]
    fn templates_pass_import_validation() {
        let ship = ShipTemplate::romulan("r", "R", "C", "TNG").build();
        let payload = serde_json::to_string(&vec![ship]).unwrap();
        let batch = crate::commands::import::validate_payload(&payload).unwrap();
        assert_eq!(batch.accepted.len(), 1);
        assert_eq!(batch.rejected, 0);
    }
}
