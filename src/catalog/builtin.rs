use super::CourseRecord;

fn course(id: u32, title: &str, category: &str, price: f64, author: &str) -> CourseRecord {
    CourseRecord {
        id,
        title: title.to_string(),
        category: category.to_string(),
        price,
        author: author.to_string(),
        image: format!("person-{id}"),
    }
}

pub fn builtin_courses() -> Vec<CourseRecord> {
    vec![
        course(1, "The Ultimate Google Ads Training Course", "Marketing", 100.0, "Jerome Bell"),
        course(2, "Product Management Fundamentals", "Management", 480.0, "Marvin McKinney"),
        course(3, "HR Management and Analytics", "HR & Recruiting", 200.0, "Leslie Alexander Li"),
        course(4, "Brand Management & PR Communications", "Marketing", 530.0, "Kristin Watson"),
        course(5, "Graphic Design Basic", "Design", 500.0, "Guy Hawkins"),
        course(6, "Business Development Management", "Management", 400.0, "Dianne Russell"),
        course(7, "Highload Software Architecture", "Development", 600.0, "Brooklyn Simmons"),
        course(8, "Human Resources - Selection and Recruitment", "HR & Recruiting", 150.0, "Kathryn Murphy"),
        course(9, "User Experience. Human-centered Design", "Design", 240.0, "Cody Fisher"),
        course(10, "Advanced JavaScript Development", "Development", 350.0, "Wade Warren"),
        course(11, "Strategic Management Essentials", "Management", 450.0, "Esther Howard"),
        course(12, "Digital Marketing Strategy", "Marketing", 320.0, "Robert Fox"),
    ]
}
