// src/utils.rs

// Answers come back with hard-wrapped lines; the answer card renders a
// single flowed paragraph.
pub fn flatten_answer(answer: &str) -> String {
    answer.replace('\n', " ")
}
