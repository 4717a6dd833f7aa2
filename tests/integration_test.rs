use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docx_rs::DocumentChild;
use exam_seat_plan::converter::{pdf_path_for, FixedLayoutConverter};
use exam_seat_plan::error::{AllocationError, ConvertError};
use exam_seat_plan::{logger, App, AppError, AppResult, Config, DocumentKind, SeatingDocument};

/// 测试用转换器：写一个占位 PDF
struct StubConverter;

#[async_trait]
impl FixedLayoutConverter for StubConverter {
    async fn convert(&self, document: &SeatingDocument, editable_path: &Path) -> AppResult<PathBuf> {
        let pdf = pdf_path_for(editable_path);
        std::fs::write(&pdf, format!("%PDF-stub {}", document.header)).unwrap();
        Ok(pdf)
    }
}

/// 测试用转换器：总是失败
struct FailingConverter;

#[async_trait]
impl FixedLayoutConverter for FailingConverter {
    async fn convert(&self, _document: &SeatingDocument, editable_path: &Path) -> AppResult<PathBuf> {
        Err(ConvertError::MissingOutput {
            path: pdf_path_for(editable_path),
        }
        .into())
    }
}

fn write_inputs(dir: &Path, students: usize, rooms: &[&str]) -> Config {
    let mut student_csv = String::from("ID,Name,Section\n");
    for i in 0..students {
        student_csv.push_str(&format!("{},Student Number {},{}\n", 2024000 + i, i, ["A", "B", "C"][i % 3]));
    }
    let mut room_csv = String::from("Rooms\n");
    for room in rooms {
        room_csv.push_str(room);
        room_csv.push('\n');
    }

    let students_path = dir.join("students.csv");
    let rooms_path = dir.join("rooms.csv");
    std::fs::write(&students_path, student_csv).unwrap();
    std::fs::write(&rooms_path, room_csv).unwrap();

    let yaml = format!(
        "rooms_file_path: {}\nstudents_file_path: {}\ncourse_code: CSE101\nexam_type: Midterm\nsemester: Spring\nyear: 2024\noutput_dir: {}\nseed: 11\n",
        rooms_path.display(),
        students_path.display(),
        dir.join("results").display()
    );
    let config_path = dir.join("config.yaml");
    std::fs::write(&config_path, yaml).unwrap();

    Config::load(&config_path).unwrap()
}

fn count_tables(path: &Path) -> usize {
    let bytes = std::fs::read(path).unwrap();
    docx_rs::read_docx(&bytes)
        .unwrap()
        .document
        .children
        .iter()
        .filter(|c| matches!(c, DocumentChild::Table(_)))
        .count()
}

#[tokio::test]
async fn test_full_run_writes_both_documents() {
    logger::init();

    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), 10, &["301", "302", "303"]);
    let results = config.output_dir.clone();
    assert!(!results.exists());

    let outputs = App::with_converter(config, Box::new(StubConverter))
        .run()
        .await
        .unwrap();

    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].kind, DocumentKind::SeatPlan);
    assert_eq!(
        outputs[0].editable,
        results.join("CSE101_Midterm_Combined_Seat_Plan_Spring_2024.docx")
    );
    assert_eq!(
        outputs[1].fixed_layout,
        results.join("CSE101_Midterm_Signature_Sheet_Spring_2024.pdf")
    );

    for output in &outputs {
        assert!(output.editable.exists());
        assert!(output.fixed_layout.exists());
        assert_eq!(count_tables(&output.editable), 3);
    }
}

#[tokio::test]
async fn test_conversion_failure_keeps_docx() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), 5, &["301"]);
    let results = config.output_dir.clone();

    let err = App::with_converter(config, Box::new(FailingConverter))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Convert(ConvertError::MissingOutput { .. })));
    assert!(results
        .join("CSE101_Midterm_Combined_Seat_Plan_Spring_2024.docx")
        .exists());
    assert!(results
        .join("CSE101_Midterm_Signature_Sheet_Spring_2024.docx")
        .exists());
}

#[tokio::test]
async fn test_empty_room_list_fails_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), 5, &[]);
    let results = config.output_dir.clone();

    let err = App::with_converter(config, Box::new(StubConverter))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Allocation(AllocationError::NoRooms { students: 5 })));
    assert!(!results.exists());
}

#[tokio::test]
async fn test_empty_roster_renders_header_only_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), 0, &["301", "302"]);

    let outputs = App::with_converter(config, Box::new(StubConverter))
        .run()
        .await
        .unwrap();

    for output in &outputs {
        assert_eq!(count_tables(&output.editable), 2);
    }
}
