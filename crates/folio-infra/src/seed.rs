//! Demo posts loaded into the store at startup.

use chrono::{DateTime, TimeZone, Utc};

use folio_core::domain::{ContentDefaults, Post, PostDraft};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/9333ea/ffffff";

const VISUAL_SPEECH_CONTENT: &str = "\
Visual Speech Recognition (VSR) has emerged as a groundbreaking technology in the field of \
human-computer interaction. This article explores the fundamental concepts, challenges, and \
recent advancements in VSR systems.

Understanding the Basics:
VSR, also known as lipreading, involves the interpretation of speech by analyzing visual \
information from the speaker's facial movements, particularly around the mouth area. \
Traditional approaches relied heavily on hand-crafted features, but modern deep learning \
techniques have revolutionized this field.

Key Challenges:
1. Variable Lighting Conditions: Environmental factors can significantly impact system performance
2. Speaker Variations: Different speaking styles and facial characteristics
3. Multi-lingual Support: Adapting to various language-specific mouth movements
4. Temporal Dependencies: Capturing the sequential nature of speech

Recent Advancements:
Modern VSR systems utilize advanced architectures like:
- Convolutional Neural Networks (CNNs) for spatial feature extraction
- Long Short-Term Memory (LSTM) networks for temporal modeling
- Transformer-based architectures for improved attention mechanisms

Future Directions:
The field is moving towards more robust, multi-modal systems that combine:
- Audio-visual fusion techniques
- Self-supervised learning approaches
- Cross-lingual adaptation methods";

const MODERN_WEB_CONTENT: &str = "\
Modern web development has evolved significantly with the advent of new frameworks, tools, \
and best practices. This article explores the essential aspects of building contemporary web \
applications.

Core Principles:
1. Responsive Design
- Mobile-first approach
- Flexible grid systems
- Adaptive imagery
- Dynamic typography

2. Accessibility
- ARIA landmarks and roles
- Keyboard navigation
- Screen reader compatibility
- Color contrast considerations

Modern Architecture:
The current landscape favors:
- Component-based development
- State management solutions
- Server-side rendering
- Static site generation

Performance Optimization:
Key factors include:
- Code splitting and lazy loading
- Asset optimization
- Caching strategies
- Network performance

Development Workflow:
Essential tools and practices:
- Version control (Git)
- CI/CD pipelines
- Automated testing
- Code quality tools";

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The canonical demo set, oldest first.
pub fn demo_posts(defaults: &ContentDefaults) -> Vec<Post> {
    vec![
        Post::with_id(
            "2",
            PostDraft {
                title: "Building Modern Web Applications".to_string(),
                excerpt: "Best practices for creating responsive and accessible web interfaces \
                          using modern frameworks and tools."
                    .to_string(),
                content: MODERN_WEB_CONTENT.to_string(),
                category: "Web Development".to_string(),
                tags: vec!["React".to_string(), "TypeScript".to_string()],
                image: Some(PLACEHOLDER_IMAGE.to_string()),
                read_time: Some("6 min read".to_string()),
            },
            defaults,
            seed_date(2024, 3, 10),
        ),
        Post::with_id(
            "1",
            PostDraft {
                title: "Understanding Visual Speech Recognition".to_string(),
                excerpt: "A deep dive into the challenges and solutions in lip reading \
                          technology, exploring current research and advancements in VSR systems."
                    .to_string(),
                content: VISUAL_SPEECH_CONTENT.to_string(),
                category: "AI & Machine Learning".to_string(),
                tags: vec!["AI".to_string(), "Deep Learning".to_string()],
                image: Some(PLACEHOLDER_IMAGE.to_string()),
                read_time: Some("8 min read".to_string()),
            },
            defaults,
            seed_date(2024, 3, 15),
        ),
    ]
}
