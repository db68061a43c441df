//! Default datasets
//!
//! Starter content written into each slot the first time it is empty.
//! Seed ids are stable slugs so the soft references between seeded
//! records (service → category, realization → service) line up.

use super::models::*;
use chrono::Utc;

pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            id: "cat-coiffure".to_string(),
            name: "Coiffure".to_string(),
            description: Some("Coupes, brushings et coiffages pour femmes et hommes".to_string()),
            parent_id: None,
            status: EntityStatus::Active,
            image: None,
        },
        Category {
            id: "cat-coloration".to_string(),
            name: "Colorations".to_string(),
            description: Some("Colorations, balayages et mèches".to_string()),
            parent_id: Some("cat-coiffure".to_string()),
            status: EntityStatus::Active,
            image: None,
        },
        Category {
            id: "cat-onglerie".to_string(),
            name: "Onglerie".to_string(),
            description: Some("Manucure, pose de vernis et nail art".to_string()),
            parent_id: None,
            status: EntityStatus::Active,
            image: None,
        },
        Category {
            id: "cat-esthetique".to_string(),
            name: "Esthétique".to_string(),
            description: Some("Soins du visage et épilations".to_string()),
            parent_id: None,
            status: EntityStatus::Active,
            image: None,
        },
    ]
}

pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: "svc-coupe-femme".to_string(),
            name: "Coupe femme".to_string(),
            description: "Coupe personnalisée avec shampooing, soin et brushing.".to_string(),
            category: "cat-coiffure".to_string(),
            duration: "1h".to_string(),
            price: "39 €".to_string(),
            included: vec![
                "Diagnostic capillaire".to_string(),
                "Shampooing et soin".to_string(),
                "Brushing".to_string(),
            ],
            excluded: vec!["Coloration".to_string()],
            status: EntityStatus::Active,
            image: None,
            variants: vec![],
        },
        Service {
            id: "svc-coupe-homme".to_string(),
            name: "Coupe homme".to_string(),
            description: "Coupe ciseaux ou tondeuse, finitions soignées.".to_string(),
            category: "cat-coiffure".to_string(),
            duration: "30 min".to_string(),
            price: "22 €".to_string(),
            included: vec!["Shampooing".to_string(), "Coiffage".to_string()],
            excluded: vec![],
            status: EntityStatus::Active,
            image: None,
            variants: vec![],
        },
        Service {
            id: "svc-coloration".to_string(),
            name: "Coloration".to_string(),
            description: "Coloration complète avec des produits professionnels sans ammoniaque."
                .to_string(),
            category: "cat-coloration".to_string(),
            duration: "1h30".to_string(),
            price: "à partir de 55 €".to_string(),
            included: vec![
                "Diagnostic couleur".to_string(),
                "Application".to_string(),
                "Brushing".to_string(),
            ],
            excluded: vec!["Décoloration".to_string()],
            status: EntityStatus::Active,
            image: None,
            variants: vec![
                ServiceVariant {
                    name: "Cheveux courts".to_string(),
                    duration: "1h15".to_string(),
                    price: "55 €".to_string(),
                },
                ServiceVariant {
                    name: "Cheveux longs".to_string(),
                    duration: "1h45".to_string(),
                    price: "75 €".to_string(),
                },
            ],
        },
        Service {
            id: "svc-manucure".to_string(),
            name: "Manucure".to_string(),
            description: "Soin complet des mains et pose de vernis classique.".to_string(),
            category: "cat-onglerie".to_string(),
            duration: "45 min".to_string(),
            price: "30 €".to_string(),
            included: vec![
                "Limage et cuticules".to_string(),
                "Pose de vernis".to_string(),
            ],
            excluded: vec!["Vernis semi-permanent".to_string()],
            status: EntityStatus::Active,
            image: None,
            variants: vec![],
        },
        Service {
            id: "svc-soin-visage".to_string(),
            name: "Soin du visage".to_string(),
            description: "Soin hydratant adapté à votre type de peau.".to_string(),
            category: "cat-esthetique".to_string(),
            duration: "1h".to_string(),
            price: "48 €".to_string(),
            included: vec![
                "Démaquillage".to_string(),
                "Gommage".to_string(),
                "Masque".to_string(),
            ],
            excluded: vec![],
            status: EntityStatus::Inactive,
            image: None,
            variants: vec![],
        },
    ]
}

pub fn default_product_categories() -> Vec<ProductCategory> {
    vec![
        ProductCategory {
            id: "pc-shampooings".to_string(),
            name: "Shampooings".to_string(),
        },
        ProductCategory {
            id: "pc-soins".to_string(),
            name: "Soins".to_string(),
        },
        ProductCategory {
            id: "pc-coiffants".to_string(),
            name: "Coiffants".to_string(),
        },
    ]
}

pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "prd-shampooing-reparateur".to_string(),
            name: "Shampooing réparateur".to_string(),
            description: "Répare et fortifie les cheveux abîmés.".to_string(),
            price: 18.5,
            image: None,
            brand: Some("Kérastase".to_string()),
            category: Some("Shampooings".to_string()),
            status: EntityStatus::Active,
        },
        Product {
            id: "prd-masque-nutrition".to_string(),
            name: "Masque nutrition intense".to_string(),
            description: "Masque nourrissant pour cheveux secs.".to_string(),
            price: 24.9,
            image: None,
            brand: Some("L'Oréal Professionnel".to_string()),
            category: Some("Soins".to_string()),
            status: EntityStatus::Active,
        },
        Product {
            id: "prd-cire-coiffante".to_string(),
            name: "Cire coiffante".to_string(),
            description: "Fixation souple et fini naturel.".to_string(),
            price: 14.0,
            image: None,
            brand: None,
            category: Some("Coiffants".to_string()),
            status: EntityStatus::Inactive,
        },
    ]
}

pub fn default_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "prt-loreal".to_string(),
            name: "L'Oréal Professionnel".to_string(),
            description: Some("Colorations et soins professionnels".to_string()),
            logo: None,
            website: Some("https://www.lorealprofessionnel.fr".to_string()),
            status: EntityStatus::Active,
        },
        Partner {
            id: "prt-opi".to_string(),
            name: "OPI".to_string(),
            description: Some("Vernis et soins des ongles".to_string()),
            logo: None,
            website: Some("https://www.opi.com".to_string()),
            status: EntityStatus::Active,
        },
    ]
}

pub fn default_realizations() -> Vec<Realization> {
    vec![
        Realization {
            id: "rea-balayage".to_string(),
            image: "/assets/realisations/balayage.jpg".to_string(),
            service_id: "svc-coloration".to_string(),
            caption: "Balayage caramel sur base châtain".to_string(),
            title: Some("Balayage caramel".to_string()),
        },
        Realization {
            id: "rea-carre-plongeant".to_string(),
            image: "/assets/realisations/carre-plongeant.jpg".to_string(),
            service_id: "svc-coupe-femme".to_string(),
            caption: "Carré plongeant effilé".to_string(),
            title: None,
        },
    ]
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "tmo-claire".to_string(),
            name: "Claire".to_string(),
            text: "Un accueil chaleureux et une coupe parfaite, je recommande !".to_string(),
            rating: 5,
            service: "Coupe femme".to_string(),
            status: TestimonialStatus::Approved,
        },
        Testimonial {
            id: "tmo-sophie".to_string(),
            name: "Sophie".to_string(),
            text: "Ma coloration est exactement comme je la voulais.".to_string(),
            rating: 5,
            service: "Coloration".to_string(),
            status: TestimonialStatus::Approved,
        },
        Testimonial {
            id: "tmo-julien".to_string(),
            name: "Julien".to_string(),
            text: "Rapide et soigné, rien à redire.".to_string(),
            rating: 4,
            service: "Coupe homme".to_string(),
            status: TestimonialStatus::Pending,
        },
    ]
}

pub fn default_news() -> Vec<News> {
    vec![News {
        id: "nws-bienvenue".to_string(),
        title: "Bienvenue sur notre nouveau site".to_string(),
        content: "Retrouvez toutes nos prestations, nos produits et nos actualités. \
                  Prenez rendez-vous en ligne dès maintenant."
            .to_string(),
        image: None,
        published_at: Utc::now(),
        status: NewsStatus::Published,
    }]
}

/// Feedback starts empty; entries only come from visitors
pub fn default_feedbacks() -> Vec<Feedback> {
    Vec::new()
}
