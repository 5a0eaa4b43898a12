// src/domain/book/catalog.rs
//! Fixed campus catalogues: the courses a book can be listed under and the
//! stock pictures assigned to new listings.

pub const COURSE_IDS: &[&str] = &[
    "ACCT 2101",
    "BIOL 1107",
    "BIOL 1108",
    "CHEM 1211",
    "CHEM 1212",
    "CS 1301",
    "CS 1302",
    "CS 2110",
    "CS 3510",
    "ECON 2105",
    "ECON 2106",
    "ENGL 1101",
    "ENGL 1102",
    "HIST 2111",
    "MATH 1551",
    "MATH 1552",
    "MATH 2550",
    "MATH 3012",
    "PHYS 2211",
    "PHYS 2212",
    "PSYC 1101",
];

pub const SAMPLE_PICTURES: &[&str] = &[
    "/static/img/books/sample_1.jpg",
    "/static/img/books/sample_2.jpg",
    "/static/img/books/sample_3.jpg",
    "/static/img/books/sample_4.jpg",
    "/static/img/books/sample_5.jpg",
    "/static/img/books/sample_6.jpg",
];

/// Look up a course id, ignoring ASCII case.
pub fn find_course(value: &str) -> Option<&'static str> {
    COURSE_IDS
        .iter()
        .copied()
        .find(|course| course.eq_ignore_ascii_case(value))
}
