//! Built-in career catalog used when no catalog file is configured.

use crate::models::career::CareerRecord;

pub fn default_careers() -> Vec<CareerRecord> {
    vec![
        CareerRecord::new(
            "Software Developer",
            "Software developers design, develop, and maintain software applications. They work with programming languages, frameworks, and tools to create solutions for various industries.",
            &["Technology", "Programming", "Problem Solving", "Mathematics", "Innovation"],
            "Programming, Algorithms, Software Design, Debugging",
        ),
        CareerRecord::new(
            "Data Scientist",
            "Data scientists analyze complex data to extract insights and help organizations make data-driven decisions. They use statistical methods, machine learning, and data visualization.",
            &["Mathematics", "Statistics", "Technology", "Analytics", "Research"],
            "Python, R, Machine Learning, Statistics, Data Visualization",
        ),
        CareerRecord::new(
            "Graphic Designer",
            "Graphic designers create visual concepts using computer software or by hand to communicate ideas that inspire, inform, and captivate consumers.",
            &["Art", "Design", "Creativity", "Visual Arts", "Aesthetics"],
            "Adobe Creative Suite, Typography, Color Theory, Layout Design",
        ),
        CareerRecord::new(
            "Marketing Manager",
            "Marketing managers develop strategies to promote products and services, analyze market trends, and coordinate marketing campaigns across various channels.",
            &["Business", "Communication", "Analytics", "Social Media", "Strategy"],
            "Digital Marketing, Market Research, Content Creation, Analytics",
        ),
        CareerRecord::new(
            "Mechanical Engineer",
            "Mechanical engineers design, develop, and test mechanical devices and systems. They work on everything from engines to manufacturing equipment.",
            &["Engineering", "Mathematics", "Physics", "Problem Solving", "Innovation"],
            "CAD Software, Engineering Principles, Mathematics, Physics",
        ),
        CareerRecord::new(
            "Psychologist",
            "Psychologists study human behavior and mental processes. They help individuals understand and overcome psychological challenges.",
            &["Psychology", "Human Behavior", "Research", "Communication", "Empathy"],
            "Research Methods, Counseling, Data Analysis, Communication",
        ),
        CareerRecord::new(
            "Financial Analyst",
            "Financial analysts evaluate investment opportunities, analyze financial data, and provide recommendations to help businesses make financial decisions.",
            &["Finance", "Mathematics", "Analytics", "Business", "Economics"],
            "Financial Modeling, Excel, Data Analysis, Market Research",
        ),
        CareerRecord::new(
            "Biomedical Engineer",
            "Biomedical engineers combine engineering principles with medical sciences to design and create equipment, devices, and software used in healthcare.",
            &["Biology", "Engineering", "Medicine", "Technology", "Research"],
            "Biomedical Systems, Engineering Design, Medical Devices, Research",
        ),
        CareerRecord::new(
            "Content Writer",
            "Content writers create written content for websites, blogs, marketing materials, and other publications. They research topics and write engaging, informative content.",
            &["Writing", "Communication", "Research", "Creativity", "Language"],
            "Writing, Research, SEO, Content Strategy, Editing",
        ),
        CareerRecord::new(
            "Environmental Scientist",
            "Environmental scientists study the environment and develop solutions to environmental problems. They analyze data and conduct research to protect natural resources.",
            &["Environment", "Science", "Research", "Nature", "Sustainability"],
            "Data Analysis, Field Research, Environmental Assessment, Report Writing",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::keywords::InterestKeywordTable;

    #[test]
    fn test_ten_unique_careers() {
        let careers = default_careers();
        assert_eq!(careers.len(), 10);
        let mut names: Vec<&str> = careers.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_every_required_interest_is_canonical() {
        let table = InterestKeywordTable::new();
        for career in default_careers() {
            for label in career.required_interest_labels() {
                assert!(
                    table.keywords_for(label).is_some(),
                    "{} requires unknown interest {label}",
                    career.name
                );
            }
        }
    }
}
