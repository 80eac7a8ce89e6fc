use chrono::NaiveDate;

use crate::modules::blog::application::domain::entities::BlogPost;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::Skill;

pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "Portfolio".to_string(),
        description: "Personal site".to_string(),
        technologies: vec!["Rust".to_string(), "actix-web".to_string()],
        thumbnail: "https://x/thumb.png".to_string(),
        is_featured: true,
        tags: vec!["web".to_string()],
        screenshots: vec![],
    }
}

pub fn sample_blog(id: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: "Hello world".to_string(),
        content: "<p>First post</p>".to_string(),
        image: "https://x/cover.jpg".to_string(),
        published: true,
        author: "u1".to_string(),
    }
}

pub fn sample_skill(id: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: "Rust".to_string(),
        icon: "https://x/rust.svg".to_string(),
    }
}

pub fn sample_experience(id: &str) -> Experience {
    Experience {
        id: id.to_string(),
        company: "Acme".to_string(),
        role: "Backend Engineer".to_string(),
        description: "APIs".to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 1, 10),
        end_date: None,
        location: "Remote".to_string(),
        technologies: vec!["Rust".to_string(), "actix-web".to_string()],
        is_current: true,
        company_icon: "https://x/acme.png".to_string(),
    }
}
