/// The closed set of pollutants the upstream models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm10,
    Pm25,
    So2,
    Co,
    O3,
    No2,
    Hc,
}

/// Static display record for one pollutant. Replaces the per-name
/// conditional text blocks of the old dashboard with one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub short_name: &'static str,
    pub description: &'static str,
    pub origin: &'static str,
    pub short_term_effects: &'static [&'static str],
    pub long_term_effects: &'static [&'static str],
    pub icon: &'static str,
}

impl Pollutant {
    /// Upstream model order.
    pub const ALL: [Pollutant; 7] = [
        Pollutant::Pm10,
        Pollutant::Pm25,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::Hc,
    ];

    pub fn parse(name: &str) -> Option<Pollutant> {
        match name {
            "PM10" => Some(Pollutant::Pm10),
            "PM2.5" => Some(Pollutant::Pm25),
            "SO2" => Some(Pollutant::So2),
            "CO" => Some(Pollutant::Co),
            "O3" => Some(Pollutant::O3),
            "NO2" => Some(Pollutant::No2),
            "HC" => Some(Pollutant::Hc),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pollutant::Pm10 => "PM10",
            Pollutant::Pm25 => "PM2.5",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::Hc => "HC",
        }
    }

    pub fn icon(self) -> &'static str {
        self.descriptor().icon
    }

    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Pollutant::Pm10 => &PM10,
            Pollutant::Pm25 => &PM25,
            Pollutant::So2 => &SO2,
            Pollutant::Co => &CO,
            Pollutant::O3 => &O3,
            Pollutant::No2 => &NO2,
            Pollutant::Hc => &HC,
        }
    }
}

static PM10: Descriptor = Descriptor {
    short_name: "Particulate matter below 10 microns",
    description: "PM10 covers airborne particles with a diameter of 10 micrometers or \
        less, including smoke, soot, salt, acids and metals. It differs from PM2.5 \
        only in size: PM2.5 is very fine while PM10 is larger and coarser.",
    origin: "Man-made sources include industry, power plants, mining, construction \
        and motor vehicles. Coarse particles largely come from mechanical processes \
        such as road dust resuspended into the air.",
    short_term_effects: &[
        "Irritation of the respiratory tract",
        "Worsened asthma symptoms",
        "Fatigue and shortness of breath",
        "Eye irritation",
    ],
    long_term_effects: &[
        "Chronic lung disease",
        "Higher risk of respiratory infections",
        "Reduced lung function",
        "Cardiovascular disease",
    ],
    icon: "💨",
};

static PM25: Descriptor = Descriptor {
    short_name: "Fine particles below 2.5 microns",
    description: "PM2.5 are particles suspended in the air with a diameter of 2.5 \
        micrometers or less. They are small enough to be absorbed into the \
        bloodstream when breathing, which is why this pollutant usually poses the \
        largest health threat.",
    origin: "Mostly secondary formation through atmospheric chemistry and direct \
        emissions from combustion, so it carries more organic species than PM10.",
    short_term_effects: &[
        "Irritation of the respiratory tract",
        "Worsened allergy symptoms",
        "Fatigue and shortness of breath",
        "Higher risk of asthma attacks",
    ],
    long_term_effects: &[
        "Chronic lung disease",
        "Heart disease",
        "Lung cancer",
        "Developmental problems in children",
        "Higher stroke risk",
        "Effects on the nervous system",
    ],
    icon: "⚙️",
};

static SO2: Descriptor = Descriptor {
    short_name: "Sulfur Dioxide",
    description: "Sulfur dioxide is a colorless gas, part of a highly reactive group \
        known as sulfur oxides. These readily react to form harmful compounds such \
        as sulfuric acid, sulfurous acid and sulfate particles.",
    origin: "Produced by burning fossil fuels that contain sulfur, such as coal, \
        coke, oil and gas.",
    short_term_effects: &[
        "Irritation of the respiratory tract",
        "Worsened asthma symptoms",
        "Fatigue and shortness of breath",
        "Eye irritation",
    ],
    long_term_effects: &[
        "Chronic lung disease",
        "Higher risk of respiratory infections",
        "Reduced lung function",
        "Cardiovascular disease",
    ],
    icon: "🌫️",
};

static CO: Descriptor = Descriptor {
    short_name: "Carbon Monoxide",
    description: "Carbon monoxide is a colorless, odorless, tasteless and highly \
        toxic gas, produced by incomplete combustion inside engines.",
    origin: "Burning of fossil fuels such as gasoline, wood, charcoal and propane; \
        motor vehicles; heating systems and household appliances such as gas stoves \
        and fireplaces; industry; tobacco smoke.",
    short_term_effects: &[
        "Headache, dizziness and nausea",
        "Difficulty breathing and fatigue",
        "Confusion, cognitive impairment and rapid heartbeat",
        "Flu-like symptoms",
    ],
    long_term_effects: &[
        "Damage to the heart and brain",
        "Chronic respiratory problems",
        "Higher cancer risk",
        "Effects on the nervous system",
    ],
    icon: "🚗",
};

static O3: Descriptor = Descriptor {
    short_name: "Ozone",
    description: "Ozone is a gas formed by ultraviolet radiation and oxygen \
        molecules. It plays an important role in blocking harmful UV light from the \
        sun, but at ground level ozone is essentially a poison.",
    origin: "In larger cities, nitrogen oxides and volatile organic compounds from \
        traffic and industry react with heat and sunlight to form ozone.",
    short_term_effects: &[
        "Irritation of the respiratory tract",
        "Reduced lung capacity",
        "Fatigue and shortness of breath",
        "Eye irritation",
    ],
    long_term_effects: &[
        "Chronic lung disease",
        "Asthma",
        "Reduced lung function",
        "Higher risk of lung cancer",
    ],
    icon: "🌞",
};

static NO2: Descriptor = Descriptor {
    short_name: "Nitrogen Dioxide",
    description: "A reddish-brown gas in its pure form. When dispersed by wind, \
        nitrogen dioxide appears whitish with a sharp, pungent smell.",
    origin: "Largely produced by motor-vehicle traffic; concentrations rise and \
        fall with traffic volume, especially in congestion.",
    short_term_effects: &[
        "Irritation of the respiratory tract",
        "Flu-like symptoms",
        "Impaired lung function",
    ],
    long_term_effects: &[
        "Chronic lung disease",
        "Worsening of asthma",
        "Reduced lung function",
        "Higher risk of lung cancer",
    ],
    icon: "🏭",
};

static HC: Descriptor = Descriptor {
    short_name: "Hydrocarbons",
    description: "Hydrocarbons consist of carbon and hydrogen and are found in \
        kerosene, gasoline, plastics, natural gas and similar products.",
    origin: "Fuel combustion and crude-oil spills; a main pollutant emitted by \
        motor vehicles. Incomplete combustion raises emissions of polycyclic \
        aromatic hydrocarbons, which are harmful to health and the environment.",
    short_term_effects: &[
        "Irritation of the respiratory tract",
        "Headache, dizziness and nausea",
        "Frequent fatigue",
    ],
    long_term_effects: &[
        "Lung damage",
        "Higher cancer risk",
        "Effects on the nervous system",
    ],
    icon: "🛢️",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_known_name() {
        for p in Pollutant::ALL {
            assert_eq!(Pollutant::parse(p.name()), Some(p));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Pollutant::parse("CO2"), None);
        assert_eq!(Pollutant::parse("pm10"), None);
        assert_eq!(Pollutant::parse(""), None);
    }

    #[test]
    fn every_pollutant_has_a_complete_descriptor() {
        for p in Pollutant::ALL {
            let d = p.descriptor();
            assert!(!d.short_name.is_empty());
            assert!(!d.description.is_empty());
            assert!(!d.origin.is_empty());
            assert!(!d.short_term_effects.is_empty());
            assert!(!d.long_term_effects.is_empty());
            assert!(!d.icon.is_empty());
        }
    }
}
