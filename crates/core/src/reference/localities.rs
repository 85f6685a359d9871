use std::collections::BTreeMap;

use super::reference_model::Locality;
use crate::constants::ZONES;

const ZONE_1: &[(&str, f64, f64)] = &[
    ("LA ESPERANZA", -24.223864609703025, -64.83666012581583),
    ("EL PIQUETE", -24.17909272413544, -64.67819610787207),
    ("CHALICAN", -24.070030285460785, -64.8060769067121),
    ("PUESTO VIEJO", -24.48206947415188, -64.9668051357245),
    ("EL BORDO", -24.659996626426764, -65.10208541183816),
    ("METAN", -25.496248768250506, -64.9710481660466),
    ("YALA", -24.12222758446989, -65.40179965760319),
    ("REYES", -24.168506022171105, -65.36626504510419),
    ("CAMPO SANTO", -24.681145270851232, -65.10404121370553),
    ("FRAILE PINTADO", -23.943686480366484, -64.80327276235155),
    ("GRAL GUEMES", -24.67377359552907, -65.04710074006934),
    ("LIBERTADOR GENERAL SAN MARTIN", -23.8, -64.7833),
    ("LOS LAPACHOS", -23.81482510316964, -64.79246245862812),
    ("ROSARIO DE LA FRONTERA", -25.797258383817375, -64.96873969293675),
    ("ROSARIO DE LERMA", -24.9776017918111, -65.57947085876567),
    ("SALTA", -24.79137674950297, -65.41599201442627),
    ("LOZANO", -24.083268286567062, -65.40280118345997),
    ("JUJUY", -24.190464705311587, -65.29268069602813),
    ("PERICO", -24.37551546137973, -65.1177106100916),
    ("PALPALA", -24.257846397486336, -65.2083880918654),
    ("EL CARMEN", -24.387691800685953, -65.25808501119432),
    ("MONTERRICO", -24.442302672930754, -65.16141537207724),
    ("SAN PEDRO", -24.23180329789856, -64.86733976299968),
    ("SAN ANTONIO", -24.440896173773638, -65.16102913397965),
];

const ZONE_2: &[(&str, f64, f64)] = &[
    ("COLONIA SANTA ROSA", -23.393441825432056, -64.42614508033033),
    ("EMBARCACION", -23.20476325389449, -64.09086718619484),
    ("HUMAHUACA", -23.205688498222166, -65.34742896557725),
    ("ORAN", -23.135882748914753, -64.32363839347943),
    ("TILCARA", -23.576640674829942, -65.393280261792),
    ("HUACALERA", -23.43840226047926, -65.3488820893022),
    ("MAIMARA", -23.624893526391844, -65.40882404167668),
    ("SANTA CLARA", -24.30938466993379, -64.66135762695116),
    ("CERRILLOS", -24.90334055117552, -65.4875738156951),
    ("EL CARRIL", -25.07348563188166, -65.49179686002672),
    ("YUTO", -23.644678070876733, -64.47368265095011),
    ("PICHANAL", -23.31388408843679, -64.20703417549286),
    ("URUNDEL", -23.558390493141154, -64.39726881395781),
    ("TUMBAYA", -23.857548848054286, -65.46726187518584),
    ("VOLCAN", -23.91700007280245, -65.4642334888327),
    ("UQUIA", -23.304077858395846, -65.3581845688357),
    ("PURMAMARCA", -23.74627933573311, -65.49920517676837),
    ("TABACAL", -23.255781878755897, -64.24454915205327),
    ("YRIGOYEN", -23.244070585705984, -64.27703028113629),
    ("VAQUEROS", -24.69486896799523, -65.41084917790579),
    ("CAMPO QUIJANO", -24.910433149017496, -65.63570584593033),
];

const ZONE_3: &[(&str, f64, f64)] = &[
    ("ABRA PAMPA", -22.722500668820256, -65.6948027193767),
    ("AGUAS BLANCAS", -22.735117570638188, -64.35415508672922),
    ("TRES CRUCES", -22.918228892818632, -65.58805867162472),
    ("METAN", -22.918273045565662, -65.58799771851997),
    ("EL GALPON", -25.380944426918138, -64.65353616788032),
    ("GENERAL MOSCONI", -22.59718453603045, -63.81243408882682),
    ("TARTAGAL", -22.516372614228306, -63.793385412775876),
];

const ZONE_4: &[(&str, f64, f64)] = &[
    ("LA QUIACA", -22.10430461824834, -65.59664008241191),
    ("POCITOS", -24.36914931870774, -66.99030421401939),
    ("SALVADOR MAZZA", -22.01089675581919, -63.678981764855166),
    ("PALMA SOLA", -23.979415051003198, -64.30452912868085),
    ("J V GONZALEZ", -23.977344732105806, -64.30402606205416),
    ("CAFAYATE", -26.072427478564602, -65.97595977926392),
];

/// Destination localities grouped by zone.
///
/// A locality name may repeat across zones, so lookups always take the zone.
#[derive(Debug, Clone)]
pub struct LocalityTable {
    by_zone: BTreeMap<String, Vec<Locality>>,
}

impl LocalityTable {
    pub fn standard() -> Self {
        let mut by_zone: BTreeMap<String, Vec<Locality>> = ZONES
            .iter()
            .map(|zone| (zone.to_string(), Vec::new()))
            .collect();
        for (zone, rows) in [("1", ZONE_1), ("2", ZONE_2), ("3", ZONE_3), ("4", ZONE_4)] {
            by_zone.insert(
                zone.to_string(),
                rows.iter()
                    .map(|(name, lat, lng)| Locality::new(name, *lat, *lng))
                    .collect(),
            );
        }
        Self { by_zone }
    }

    pub fn zones(&self) -> Vec<&str> {
        self.by_zone.keys().map(String::as_str).collect()
    }

    /// Localities in a zone; empty for unknown zones.
    pub fn in_zone(&self, zone: &str) -> &[Locality] {
        self.by_zone.get(zone).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, zone: &str, name: &str) -> Option<&Locality> {
        self.in_zone(zone).iter().find(|l| l.name == name)
    }
}

impl Default for LocalityTable {
    fn default() -> Self {
        Self::standard()
    }
}
