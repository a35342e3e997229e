//! # Exam Service Module
//!
//! Routes under `/api/exams`. Creating and updating exams takes a
//! `multipart/form-data` body because an exam carries an attachment; the
//! handlers decode the form and hand the record/file pair to `ExamService`,
//! which owns the ordering of database and filesystem side effects.
//!
//! ## Registered routes
//!
//! * `POST /`: create from form fields plus a required `file` part.
//! * `GET /`: list, optionally windowed with `?skip=&limit=`.
//! * `GET /{exam_id}`: one exam or 404.
//! * `PUT /{exam_id}`: partial update, optionally with a replacement `file`.
//! * `DELETE /{exam_id}`: removes the attachment (if still present) and the row.
//! * `GET /{exam_id}/file`: the attachment itself.

mod attachment;
mod create;
mod delete;
mod get;
mod list;
pub(crate) mod service;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/exams";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{exam_id}", get().to(get::process))
        .route("/{exam_id}", put().to(update::process))
        .route("/{exam_id}", delete().to(delete::process))
        .route("/{exam_id}/file", get().to(attachment::process))
}

#[cfg(test)]
mod tests {
    use crate::services::multipart::tests::body;
    use crate::services::testing::{self, BOUNDARY};
    use crate::services::configure;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use common::model::exam::Exam;

    fn exam_parts<'a>(
        title: &'a str,
        filename: &'a str,
        content: &'a [u8],
    ) -> Vec<(&'a str, Option<&'a str>, &'a [u8])> {
        vec![
            ("title", None, title.as_bytes()),
            ("code", None, &b"C101"[..]),
            ("type", None, &b"midterm"[..]),
            ("year", None, &b"2024"[..]),
            ("userid", None, &b"7"[..]),
            ("file", Some(filename), content),
        ]
    }

    fn multipart(req: test::TestRequest, parts: &[(&str, Option<&str>, &[u8])]) -> test::TestRequest {
        req.insert_header((header::CONTENT_TYPE, testing::multipart_content_type()))
            .set_payload(body(BOUNDARY, parts))
    }

    #[actix_web::test]
    async fn create_get_and_download_round_trip() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let req = multipart(
            test::TestRequest::post().uri("/api/exams"),
            &exam_parts("T", "t.pdf", b"PDF..."),
        )
        .to_request();
        let created: Exam = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.title, "T");
        assert_eq!(created.kind, "midterm");
        assert_eq!(created.userid, 7);
        assert_eq!(created.filename, "t.pdf");

        let req = test::TestRequest::get()
            .uri(&format!("/api/exams/{}", created.id))
            .to_request();
        let fetched: Exam = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::get()
            .uri(&format!("/api/files/{}", fetched.filename))
            .to_request();
        let bytes = test::call_and_read_body(&app, req).await;
        assert_eq!(bytes.as_ref(), b"PDF...");

        let req = test::TestRequest::get()
            .uri(&format!("/api/exams/{}/file", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition.to_str().unwrap().starts_with("inline"));
        let bytes = test::read_body(resp).await;
        assert_eq!(bytes.as_ref(), b"PDF...");

        let req = test::TestRequest::get()
            .uri(&format!("/api/exams/{}/file", created.id + 1))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn create_without_file_or_userid_is_rejected() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let mut no_file = exam_parts("T", "t.pdf", b"x");
        no_file.pop();
        let mut bad_userid = exam_parts("T", "t.pdf", b"x");
        bad_userid[4] = ("userid", None, &b"seven"[..]);

        for parts in [no_file, bad_userid] {
            let req = multipart(test::TestRequest::post().uri("/api/exams"), &parts).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
        assert!(env.state.files.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn oversized_upload_is_rejected() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let big = vec![b'x'; env.state.max_upload_bytes + 1];
        let req = multipart(
            test::TestRequest::post().uri("/api/exams"),
            &exam_parts("T", "big.pdf", &big),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(env.state.files.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn list_honours_skip_and_limit() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        for (title, file) in [("one", "1.pdf"), ("two", "2.pdf"), ("three", "3.pdf")] {
            let req = multipart(
                test::TestRequest::post().uri("/api/exams"),
                &exam_parts(title, file, b"x"),
            )
            .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get()
            .uri("/api/exams?skip=1&limit=1")
            .to_request();
        let page: Vec<Exam> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "two");

        let req = test::TestRequest::get().uri("/api/exams").to_request();
        let all: Vec<Exam> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);

        let req = test::TestRequest::get()
            .uri("/api/exams?skip=-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn update_fields_and_replace_file() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let req = multipart(
            test::TestRequest::post().uri("/api/exams"),
            &exam_parts("T", "v1.pdf", b"one"),
        )
        .to_request();
        let created: Exam = test::call_and_read_body_json(&app, req).await;

        // Blank fields are ignored, provided ones overwrite.
        let parts: Vec<(&str, Option<&str>, &[u8])> = vec![
            ("title", None, &b""[..]),
            ("year", None, &b"2025"[..]),
            ("file", Some("v2.pdf"), &b"two"[..]),
        ];
        let req = multipart(
            test::TestRequest::put().uri(&format!("/api/exams/{}", created.id)),
            &parts,
        )
        .to_request();
        let updated: Exam = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.title, "T");
        assert_eq!(updated.year, "2025");
        assert_eq!(updated.code, "C101");
        assert_eq!(updated.filename, "v2.pdf");

        let files = env.state.files.list().await.unwrap();
        assert_eq!(files, ["v1.pdf", "v2.pdf"]);
    }

    #[actix_web::test]
    async fn update_with_blank_file_input_keeps_the_attachment() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let req = multipart(
            test::TestRequest::post().uri("/api/exams"),
            &exam_parts("T", "t.pdf", b"x"),
        )
        .to_request();
        let created: Exam = test::call_and_read_body_json(&app, req).await;

        let parts: Vec<(&str, Option<&str>, &[u8])> =
            vec![("code", None, &b"C999"[..]), ("file", Some(""), &b""[..])];
        let req = multipart(
            test::TestRequest::put().uri(&format!("/api/exams/{}", created.id)),
            &parts,
        )
        .to_request();
        let updated: Exam = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.code, "C999");
        assert_eq!(updated.filename, "t.pdf");
    }

    #[actix_web::test]
    async fn delete_removes_row_and_attachment() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let req = multipart(
            test::TestRequest::post().uri("/api/exams"),
            &exam_parts("T", "t.pdf", b"x"),
        )
        .to_request();
        let created: Exam = test::call_and_read_body_json(&app, req).await;

        let uri = format!("/api/exams/{}", created.id);
        let req = test::TestRequest::delete().uri(&uri).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Exam deleted");
        assert!(env.state.files.list().await.unwrap().is_empty());

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_of_unknown_exam_is_404() {
        let env = testing::env();
        let app = test::init_service(
            App::new().configure(configure(env.state.clone(), &env.config)),
        )
        .await;

        let parts: Vec<(&str, Option<&str>, &[u8])> = vec![("file", Some("x.pdf"), &b"x"[..])];
        let req = multipart(test::TestRequest::put().uri("/api/exams/5"), &parts).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(env.state.files.list().await.unwrap().is_empty());
    }
}
