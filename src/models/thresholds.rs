use crate::models::Pollutant;

/// Breakpoint table per pollutant. Configured but not consulted by any chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterThresholds {
    entries: [(Pollutant, [f64; 4]); 6],
}

pub const PARAMETER_THRESHOLDS: ParameterThresholds = ParameterThresholds {
    entries: [
        (Pollutant::Pm25, [12.0, 35.4, 150.4, f64::INFINITY]),
        (Pollutant::Pm10, [54.0, 154.0, 254.0, f64::INFINITY]),
        (Pollutant::So2, [35.0, 75.0, 185.0, f64::INFINITY]),
        (Pollutant::No2, [53.0, 100.0, 360.0, f64::INFINITY]),
        (Pollutant::Co, [4400.0, 9400.0, 12400.0, f64::INFINITY]),
        (Pollutant::O3, [54.0, 70.0, 85.0, f64::INFINITY]),
    ],
};

impl ParameterThresholds {
    /// Pollutants in table order, which is also the parameter picker order.
    pub fn pollutants(&self) -> impl Iterator<Item = Pollutant> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn breakpoints(&self, pollutant: Pollutant) -> &[f64] {
        self.entries
            .iter()
            .find(|(p, _)| *p == pollutant)
            .map(|(_, b)| b.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, &[f64])> + '_ {
        self.entries.iter().map(|(p, b)| (*p, b.as_slice()))
    }

    pub fn summary(&self) -> String {
        self.iter()
            .map(|(p, breakpoints)| {
                let values = breakpoints
                    .iter()
                    .map(|b| {
                        if b.is_infinite() {
                            "inf".to_string()
                        } else {
                            format!("{}", b)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("- {:<6} [{}]", p.name(), values)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ParameterThresholds {
    fn default() -> Self {
        PARAMETER_THRESHOLDS
    }
}
