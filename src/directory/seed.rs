//! 内置模拟数据
//!
//! 启动时装载到 [`Directory`](super::Directory) 与内存存储中。

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    attendance::entities::AttendanceRecord,
    classes::entities::ClassLevel,
    content::entities::{DateRange, LessonPlan, RecordedClass},
    events::entities::{EventType, SchoolEvent},
    exams::entities::{Exam, ExamType},
    results::entities::StudentResult,
    students::entities::Student,
    subjects::entities::Subject,
    teachers::entities::{Assignment, Teacher},
    users::entities::{Admin, Credential, UserRole},
};

pub const ADMIN_PASSWORD: &str = "admin123";
pub const TEACHER_PASSWORD: &str = "teacher123";
pub const STUDENT_PASSWORD: &str = "student123";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).expect("valid seed time")
}

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

pub fn admins() -> Vec<Admin> {
    vec![
        Admin {
            id: "admin1".into(),
            name: "Rajesh Kumar".into(),
            email: "principal@vidyaerp.com".into(),
            contact_number: "+91 9876543210".into(),
            avatar: Some("https://randomuser.me/api/portraits/men/42.jpg".into()),
        },
        Admin {
            id: "admin2".into(),
            name: "Priya Sharma".into(),
            email: "viceprincipal@vidyaerp.com".into(),
            contact_number: "+91 9876543211".into(),
            avatar: Some("https://randomuser.me/api/portraits/women/43.jpg".into()),
        },
    ]
}

pub fn teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            id: "teacher1".into(),
            name: "Anjali Gupta".into(),
            email: "anjali@vidyaerp.com".into(),
            subjects: vec!["math_pri".into(), "math_mid".into()],
            classes: vec![
                Assignment::new(5, "A", "math_pri"),
                Assignment::new(6, "B", "math_mid"),
                Assignment::new(7, "A", "math_mid"),
            ],
            contact_number: "+91 8765432101".into(),
            qualification: "M.Sc., B.Ed".into(),
            joining_date: date(2020, 6, 15),
            avatar: Some("https://randomuser.me/api/portraits/women/22.jpg".into()),
        },
        Teacher {
            id: "teacher2".into(),
            name: "Suresh Verma".into(),
            email: "suresh@vidyaerp.com".into(),
            subjects: vec!["hin_pri".into(), "sst_mid".into()],
            classes: vec![
                Assignment::new(3, "A", "hin_pri"),
                Assignment::new(6, "C", "sst_mid"),
            ],
            contact_number: "+91 8765432102".into(),
            qualification: "M.A., B.Ed".into(),
            joining_date: date(2019, 7, 10),
            avatar: Some("https://randomuser.me/api/portraits/men/32.jpg".into()),
        },
        Teacher {
            id: "teacher3".into(),
            name: "Meena Iyer".into(),
            email: "meena@vidyaerp.com".into(),
            subjects: vec!["eng_mid".into(), "comp_mid".into()],
            classes: vec![
                Assignment::new(8, "A", "eng_mid"),
                Assignment::new(9, "B", "comp_mid"),
            ],
            contact_number: "+91 8765432103".into(),
            qualification: "M.Phil., B.Ed".into(),
            joining_date: date(2018, 6, 20),
            avatar: Some("https://randomuser.me/api/portraits/women/62.jpg".into()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn student(
    n: u32,
    name: &str,
    class: u8,
    section: &str,
    roll: &str,
    dob: NaiveDate,
    parent: &str,
    address: &str,
    admitted: NaiveDate,
) -> Student {
    let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    Student {
        id: format!("student{n}"),
        name: name.into(),
        email: format!("{first}@vidyaerp.com"),
        class,
        section: section.into(),
        roll_number: roll.into(),
        registration_number: format!("VID2023{n:03}"),
        parent_name: parent.into(),
        parent_contact: format!("+91 98765432{}", 19 + n),
        date_of_birth: Some(dob),
        address: Some(address.into()),
        admission_date: Some(admitted),
        avatar: None,
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student(1, "Amit Patel", 5, "A", "5A01", date(2013, 5, 12), "Rakesh Patel", "123 Nehru Road, Mumbai", date(2019, 4, 10)),
        student(2, "Neha Singh", 8, "B", "8B15", date(2010, 11, 23), "Harpreet Singh", "456 Gandhi Marg, Delhi", date(2016, 4, 5)),
        student(3, "Raj Sharma", 10, "A", "10A22", date(2008, 2, 28), "Vinod Sharma", "789 Subhash Nagar, Pune", date(2014, 4, 12)),
        student(4, "Priya Desai", 3, "C", "3C05", date(2015, 8, 10), "Manish Desai", "567 Vijay Path, Bangalore", date(2021, 4, 14)),
        student(5, "Rahul Kumar", 5, "A", "5A02", date(2013, 6, 15), "Mohan Kumar", "123 MG Road, Mumbai", date(2019, 4, 12)),
        student(6, "Ananya Sharma", 6, "B", "6B01", date(2012, 8, 21), "Rajesh Sharma", "456 Park Street, Delhi", date(2018, 4, 10)),
        student(7, "Vikram Singh", 7, "A", "7A01", date(2011, 9, 5), "Amarjeet Singh", "789 Lake Road, Chandigarh", date(2017, 4, 15)),
    ]
}

/// 1 到 10 年级，每个年级 A/B/C 三个分班
pub fn classes() -> Vec<ClassLevel> {
    (1..=10)
        .map(|n| ClassLevel::standard(n, &["A", "B", "C"]))
        .collect()
}

pub fn subjects() -> Vec<Subject> {
    let primary = 1..=5;
    let middle = 6..=8;
    let secondary = 9..=10;
    vec![
        Subject::new("eng_pri", "English", "ENG", primary.clone()),
        Subject::new("hin_pri", "Hindi", "HIN", primary.clone()),
        Subject::new("math_pri", "Mathematics", "MATH", primary.clone()),
        Subject::new("evs_pri", "EVS", "EVS", primary.clone()),
        Subject::new("gk_pri", "General Knowledge", "GK", primary.clone()),
        Subject::new("comp_pri", "Computer", "COMP", primary),
        Subject::new("eng_mid", "English", "ENG", middle.clone()),
        Subject::new("hin_mid", "Hindi", "HIN", middle.clone()),
        Subject::new("math_mid", "Mathematics", "MATH", middle.clone()),
        Subject::new("sci_mid", "Science", "SCI", middle.clone()),
        Subject::new("sst_mid", "Social Science", "SST", middle.clone()),
        Subject::new("comp_mid", "Computer", "COMP", middle.clone()),
        Subject::new("gk_mid", "General Knowledge", "GK", middle),
        Subject::new("eng_sec", "English", "ENG", secondary.clone()),
        Subject::new("hin_sec", "Hindi", "HIN", secondary.clone()),
        Subject::new("math_sec", "Mathematics", "MATH", secondary.clone()),
        Subject::new("phy_sec", "Physics", "PHY", secondary.clone()),
        Subject::new("chem_sec", "Chemistry", "CHEM", secondary.clone()),
        Subject::new("bio_sec", "Biology", "BIO", secondary.clone()),
        Subject::new("hist_sec", "History", "HIST", secondary.clone()),
        Subject::new("geo_sec", "Geography", "GEO", secondary.clone()),
        Subject::new("civ_sec", "Civics", "CIV", secondary.clone()),
        Subject::new("eco_sec", "Economics", "ECO", secondary.clone()),
        Subject::new("comp_sec", "Computer", "COMP", secondary),
    ]
}

pub fn exams() -> Vec<Exam> {
    let all: BTreeSet<u8> = (1..=10).collect();
    vec![
        Exam {
            id: "exam1".into(),
            name: "First Unit Test".into(),
            exam_type: ExamType::UnitTest,
            start_date: date(2023, 7, 10),
            end_date: date(2023, 7, 15),
            max_marks: 25,
            classes_applicable: all.clone(),
        },
        Exam {
            id: "exam2".into(),
            name: "Half Yearly Examination".into(),
            exam_type: ExamType::HalfYearly,
            start_date: date(2023, 9, 15),
            end_date: date(2023, 9, 25),
            max_marks: 100,
            classes_applicable: all.clone(),
        },
        Exam {
            id: "exam3".into(),
            name: "Second Unit Test".into(),
            exam_type: ExamType::UnitTest,
            start_date: date(2023, 11, 20),
            end_date: date(2023, 11, 25),
            max_marks: 25,
            classes_applicable: all.clone(),
        },
        Exam {
            id: "exam4".into(),
            name: "Final Examination".into(),
            exam_type: ExamType::Final,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 15),
            max_marks: 100,
            classes_applicable: all,
        },
    ]
}

pub fn events() -> Vec<SchoolEvent> {
    vec![
        SchoolEvent {
            id: "event1".into(),
            title: "Annual Sports Day".into(),
            description: "Annual inter-house sports competition with various athletic events".into(),
            start_date_time: datetime(2023, 12, 10, 9, 0, 0),
            end_date_time: datetime(2023, 12, 10, 16, 0, 0),
            location: "School Playground".into(),
            event_type: EventType::Sports,
            for_classes: None,
            created_by: "admin1".into(),
            created_at: datetime(2023, 11, 1, 10, 30, 0),
        },
        SchoolEvent {
            id: "event2".into(),
            title: "Half Yearly Examination".into(),
            description: "Mid-term assessment for all classes".into(),
            start_date_time: datetime(2023, 9, 15, 9, 0, 0),
            end_date_time: datetime(2023, 9, 25, 15, 0, 0),
            location: "Respective Classrooms".into(),
            event_type: EventType::Exam,
            for_classes: Some((1..=10).collect()),
            created_by: "admin1".into(),
            created_at: datetime(2023, 8, 20, 11, 15, 0),
        },
        SchoolEvent {
            id: "event3".into(),
            title: "Diwali Holiday".into(),
            description: "School closed for Diwali celebration".into(),
            start_date_time: datetime(2023, 11, 10, 0, 0, 0),
            end_date_time: datetime(2023, 11, 15, 23, 59, 59),
            location: "School".into(),
            event_type: EventType::Holiday,
            for_classes: None,
            created_by: "admin1".into(),
            created_at: datetime(2023, 10, 1, 9, 0, 0),
        },
        SchoolEvent {
            id: "event4".into(),
            title: "Science Exhibition".into(),
            description: "Annual science innovation showcase by students".into(),
            start_date_time: datetime(2023, 8, 25, 10, 0, 0),
            end_date_time: datetime(2023, 8, 26, 16, 0, 0),
            location: "School Auditorium".into(),
            event_type: EventType::Cultural,
            for_classes: Some((6..=10).collect()),
            created_by: "teacher2".into(),
            created_at: datetime(2023, 7, 15, 14, 20, 0),
        },
    ]
}

pub fn lesson_plans() -> Vec<LessonPlan> {
    vec![
        LessonPlan {
            id: "lp1".into(),
            title: "Introduction to Fractions".into(),
            description: "Understanding basic fractions and their applications".into(),
            class_id: 5,
            section: "A".into(),
            subject_id: "math_pri".into(),
            teacher_id: "teacher1".into(),
            date_created: date(2023, 4, 1),
            date_range: DateRange {
                start: date(2023, 4, 10),
                end: date(2023, 4, 17),
            },
            content: "Week 1: Introduction to fractions\nWeek 2: Addition and subtraction of fractions\nWeek 3: Multiplication of fractions\nWeek 4: Division of fractions".into(),
            attachments: vec!["fraction_worksheet.pdf".into()],
        },
        LessonPlan {
            id: "lp2".into(),
            title: "Plant Kingdom Classification".into(),
            description: "Exploring the diverse classification of plants".into(),
            class_id: 8,
            section: "B".into(),
            subject_id: "sci_mid".into(),
            teacher_id: "teacher2".into(),
            date_created: date(2023, 4, 2),
            date_range: DateRange {
                start: date(2023, 4, 11),
                end: date(2023, 4, 25),
            },
            content: "Week 1: Introduction to plant kingdom\nWeek 2: Classification criteria\nWeek 3: Major plant groups\nWeek 4: Adaptations and evolution".into(),
            attachments: vec!["plant_classification.pdf".into(), "lab_activity.pdf".into()],
        },
    ]
}

pub fn recorded_classes() -> Vec<RecordedClass> {
    vec![
        RecordedClass {
            id: "rc1".into(),
            title: "Understanding Polynomials".into(),
            description: "Complete lesson on algebraic polynomials and their operations".into(),
            class_id: 9,
            section: "B".into(),
            subject_id: "math_sec".into(),
            teacher_id: "teacher1".into(),
            date_recorded: date(2023, 4, 5),
            duration_minutes: 45,
            video_url: "https://example.com/videos/math_polynomials.mp4".into(),
            thumbnail_url: Some("https://example.com/thumbnails/math_polynomials.jpg".into()),
            created_at: datetime(2023, 4, 5, 0, 0, 0),
        },
        RecordedClass {
            id: "rc2".into(),
            title: "Cell Structure and Functions".into(),
            description: "Detailed explanation of cell organelles and their functions".into(),
            class_id: 8,
            section: "A".into(),
            subject_id: "sci_mid".into(),
            teacher_id: "teacher3".into(),
            date_recorded: date(2023, 4, 7),
            duration_minutes: 50,
            video_url: "https://example.com/videos/science_cells.mp4".into(),
            thumbnail_url: Some("https://example.com/thumbnails/science_cells.jpg".into()),
            created_at: datetime(2023, 4, 7, 0, 0, 0),
        },
    ]
}

/// 今日的示例考勤（最新在前）
pub fn attendance_records(today: NaiveDate) -> Vec<AttendanceRecord> {
    let record = |id: &str, class_id: u8, section: &str, subject: &str, present: &[&str]| {
        AttendanceRecord {
            id: id.into(),
            date: today,
            class_id,
            section: section.into(),
            subject_id: subject.into(),
            present_students: set(present),
            absent_students: BTreeSet::new(),
            teacher_id: "teacher1".into(),
        }
    };
    vec![
        record("att1", 5, "A", "math_pri", &["student1", "student5"]),
        record("att2", 6, "B", "math_mid", &["student6"]),
        record("att3", 7, "A", "math_mid", &["student7"]),
    ]
}

pub fn student_results() -> Vec<StudentResult> {
    let result = |id: &str, student: &str, subject: &str, marks: i32, remarks: &str, teacher: &str| {
        StudentResult {
            id: id.into(),
            student_id: student.into(),
            exam_id: "exam1".into(),
            subject_id: subject.into(),
            marks_obtained: marks,
            remarks: Some(remarks.into()),
            teacher_id: teacher.into(),
        }
    };
    vec![
        result("result1", "student1", "math_pri", 22, "Excellent performance", "teacher1"),
        result("result2", "student1", "eng_pri", 20, "Good performance", "teacher3"),
        result("result3", "student2", "sci_mid", 18, "Good, but needs improvement in practical applications", "teacher2"),
    ]
}

/// 模拟登录凭据：每种角色一个共享的明文密码
pub fn credentials(admins: &[Admin], teachers: &[Teacher], students: &[Student]) -> Vec<Credential> {
    let admins = admins.iter().map(|a| Credential {
        user_id: a.id.clone(),
        email: a.email.clone(),
        password: ADMIN_PASSWORD.into(),
        role: UserRole::Admin,
    });
    let teachers = teachers.iter().map(|t| Credential {
        user_id: t.id.clone(),
        email: t.email.clone(),
        password: TEACHER_PASSWORD.into(),
        role: UserRole::Teacher,
    });
    let students = students.iter().map(|s| Credential {
        user_id: s.id.clone(),
        email: s.email.clone(),
        password: STUDENT_PASSWORD.into(),
        role: UserRole::Student,
    });
    admins.chain(teachers).chain(students).collect()
}
