//! Diesel adapters against embedded PostgreSQL.
//!
//! Opt-in: `RUN_PG_EMBEDDED=1 cargo test -- --ignored`. The suite migrates a
//! fresh cluster, seeds courses and enrollments with plain SQL and checks the
//! repositories through the domain services.

use std::sync::Arc;

use coursehub::domain::ports::{ActiveStudentsQuery, CourseCategoriesQuery};
use coursehub::domain::{
    CategoryLookupService, CourseId, EnrollmentFilter, EnrollmentQueryService, EnrollmentStatus,
};
use coursehub::outbound::persistence::{
    DbConnectionManager, DieselCourseRepository, DieselEnrollmentRepository, PoolConfig,
};
use diesel::connection::SimpleConnection;
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const MATHS: &str = "11111111-1111-1111-1111-111111111111";
const ART: &str = "22222222-2222-2222-2222-222222222222";
const HISTORY: &str = "33333333-3333-3333-3333-333333333333";

const SEED: &str = "
INSERT INTO courses (id, title, category) VALUES
    ('11111111-1111-1111-1111-111111111111', 'Calculus I', 'Mathematics'),
    ('22222222-2222-2222-2222-222222222222', 'Watercolour', 'Art'),
    ('33333333-3333-3333-3333-333333333333', 'Modern Europe', 'Mathematics');
INSERT INTO course_enrollments (id, student_id, course_id, is_active) VALUES
    (gen_random_uuid(), 'aaaaaaaa-0000-0000-0000-000000000001', '11111111-1111-1111-1111-111111111111', TRUE),
    (gen_random_uuid(), 'aaaaaaaa-0000-0000-0000-000000000001', '22222222-2222-2222-2222-222222222222', TRUE),
    (gen_random_uuid(), 'aaaaaaaa-0000-0000-0000-000000000002', '11111111-1111-1111-1111-111111111111', TRUE),
    (gen_random_uuid(), 'aaaaaaaa-0000-0000-0000-000000000003', '22222222-2222-2222-2222-222222222222', FALSE),
    (gen_random_uuid(), 'aaaaaaaa-0000-0000-0000-000000000004', '33333333-3333-3333-3333-333333333333', FALSE);
";

fn embedded_enabled() -> bool {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1") {
        return true;
    }
    eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
    false
}

fn seeded_database(cluster: &TestCluster) -> String {
    let url = cluster.connection().database_url("postgres");
    let mut conn = PgConnection::establish(&url).expect("connect to embedded cluster");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("migrations apply");
    conn.batch_execute(SEED).expect("seed rows");
    url
}

fn course_id(raw: &str) -> CourseId {
    CourseId::new(raw).expect("valid course id")
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_adapters_answer_course_queries() {
    if !embedded_enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = seeded_database(&cluster);
    let runtime = Runtime::new().expect("tokio runtime");

    runtime.block_on(async {
        let connections = Arc::new(DbConnectionManager::postgres(PoolConfig::new(url)));
        let enrollments =
            EnrollmentQueryService::new(Arc::new(DieselEnrollmentRepository::new(Arc::clone(
                &connections,
            ))));
        let categories =
            CategoryLookupService::new(Arc::new(DieselCourseRepository::new(Arc::clone(
                &connections,
            ))));
        assert!(!connections.is_connected());

        let active = enrollments
            .count_active_students()
            .await
            .expect("active count");
        assert_eq!(active, 2);
        assert!(connections.is_connected());

        let everyone = enrollments
            .count_students(EnrollmentFilter::all())
            .await
            .expect("total count");
        assert_eq!(everyone, 4);

        let inactive_art = enrollments
            .distinct_students(
                EnrollmentFilter::with_status(EnrollmentStatus::Inactive)
                    .for_course(course_id(ART)),
            )
            .await
            .expect("inactive art students");
        assert_eq!(inactive_art.len(), 1);

        let active_maths = enrollments
            .count_students(EnrollmentFilter::active().for_course(course_id(MATHS)))
            .await
            .expect("active maths count");
        assert_eq!(active_maths, 2);

        let history = enrollments
            .count_students(EnrollmentFilter::active().for_course(course_id(HISTORY)))
            .await
            .expect("active history count");
        assert_eq!(history, 0);

        let labels: Vec<String> = categories
            .categories()
            .await
            .expect("categories")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(labels, ["Art", "Mathematics"]);
    });
}
