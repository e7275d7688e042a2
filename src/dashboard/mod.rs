use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplingSite {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesCount {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub user: UserProfile,
    pub site: SamplingSite,
    pub species: Vec<SpeciesCount>,
}

/// The demo dataset the dashboard view renders. Served verbatim; nothing is
/// fetched or persisted.
pub fn sample_data() -> DashboardData {
    DashboardData {
        user: UserProfile {
            name: "John Smith".to_string(),
            email: "john.smith@marine.com".to_string(),
        },
        site: SamplingSite {
            name: "Andaman & Nicobar Islands".to_string(),
            latitude: 11.7401,
            longitude: 92.7381,
            description: "High species diversity area".to_string(),
        },
        species: vec![
            species("Diatoms", 120),
            species("Dinoflagellates", 85),
            species("Copepods", 60),
            species("Larvae", 40),
        ],
    }
}

fn species(name: &str, count: u32) -> SpeciesCount {
    SpeciesCount {
        name: name.to_string(),
        count,
    }
}
