pub mod enroll_face_use_case;
pub mod recognize_face_use_case;
