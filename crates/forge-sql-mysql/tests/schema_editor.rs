//! Schema editor orchestration tests.
//!
//! A scripted in-memory channel stands in for the session layer: it
//! records every submitted statement in order and replays pre-seeded
//! responses, so each test can assert the exact statement sequence.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use forge_sql_core::channel::{ExecutionError, Row, StatementChannel};
use forge_sql_core::routine::{RoutineDefinition, RoutineParam};
use forge_sql_core::table::TableRef;
use forge_sql_mysql::error::SchemaError;
use forge_sql_mysql::schema::SchemaEditor;

#[derive(Default)]
struct ScriptedChannel {
    statements: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Result<Vec<Row>, ExecutionError>>>,
}

impl ScriptedChannel {
    fn new() -> Self {
        Self::default()
    }

    fn respond(self, response: Result<Vec<Row>, ExecutionError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatementChannel for ScriptedChannel {
    async fn submit(&self, sql: &str) -> Result<Vec<Row>, ExecutionError> {
        self.statements.lock().unwrap().push(sql.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn foreign_key_row(name: &str) -> Row {
    Row::new().with("constraint_name", name)
}

#[tokio::test]
async fn test_remove_column_without_foreign_keys() {
    let channel = ScriptedChannel::new().respond(Ok(Vec::new()));
    let editor = SchemaEditor::new(&channel);

    editor
        .remove_column(&TableRef::new("pets"), "owner_id")
        .await
        .unwrap();

    let statements = channel.statements();
    assert_eq!(statements.len(), 2);
    assert!(statements[0].contains("INFORMATION_SCHEMA.KEY_COLUMN_USAGE"));
    assert_eq!(statements[1], "ALTER TABLE `pets` DROP COLUMN `owner_id`");
}

#[tokio::test]
async fn test_remove_column_drops_foreign_keys_first() {
    let channel = ScriptedChannel::new().respond(Ok(vec![
        foreign_key_row("PRIMARY"),
        foreign_key_row("pets_owner_id_foreign_idx"),
        foreign_key_row("pets_owner_id_shadow_idx"),
    ]));
    let editor = SchemaEditor::new(&channel);

    editor
        .remove_column(&TableRef::new("pets"), "owner_id")
        .await
        .unwrap();

    let statements = channel.statements();
    // lookup, two foreign-key drops (primary key excluded), column drop
    assert_eq!(statements.len(), 4);
    assert_eq!(
        statements[1],
        "ALTER TABLE `pets` DROP FOREIGN KEY `pets_owner_id_foreign_idx`"
    );
    assert_eq!(
        statements[2],
        "ALTER TABLE `pets` DROP FOREIGN KEY `pets_owner_id_shadow_idx`"
    );
    assert_eq!(statements[3], "ALTER TABLE `pets` DROP COLUMN `owner_id`");
}

#[tokio::test]
async fn test_remove_column_aborts_when_a_drop_fails() {
    let channel = ScriptedChannel::new()
        .respond(Ok(vec![foreign_key_row("pets_owner_id_foreign_idx")]))
        .respond(Err(ExecutionError::new("ER_ROW_IS_REFERENCED")));
    let editor = SchemaEditor::new(&channel);

    let error = editor
        .remove_column(&TableRef::new("pets"), "owner_id")
        .await
        .unwrap_err();

    assert!(matches!(error, SchemaError::Execution(_)));
    assert_eq!(error.to_string(), "ER_ROW_IS_REFERENCED");
    // the column drop was never issued
    let statements = channel.statements();
    assert_eq!(statements.len(), 2);
    assert!(!statements.iter().any(|sql| sql.contains("DROP COLUMN")));
}

#[tokio::test]
async fn test_remove_constraint_unknown() {
    let channel = ScriptedChannel::new().respond(Ok(Vec::new()));
    let editor = SchemaEditor::new(&channel);

    let error = editor
        .remove_constraint(&TableRef::new("t"), "missing_c")
        .await
        .unwrap_err();

    match error {
        SchemaError::UnknownConstraint { constraint, table } => {
            assert_eq!(constraint, "missing_c");
            assert_eq!(table, "t");
        }
        other => panic!("expected UnknownConstraint, got {other:?}"),
    }
    // only the introspection query ran
    assert_eq!(channel.statements().len(), 1);
}

#[tokio::test]
async fn test_remove_constraint_foreign_key() {
    let row = Row::new()
        .with("constraint_name", "pets_owner_id_foreign_idx")
        .with("constraint_type", "FOREIGN KEY")
        .with("table_name", "pets");
    let channel = ScriptedChannel::new().respond(Ok(vec![row]));
    let editor = SchemaEditor::new(&channel);

    editor
        .remove_constraint(&TableRef::new("pets"), "pets_owner_id_foreign_idx")
        .await
        .unwrap();

    let statements = channel.statements();
    assert_eq!(statements.len(), 2);
    assert!(statements[0].contains("INFORMATION_SCHEMA.TABLE_CONSTRAINTS"));
    assert!(statements[0].contains("AND CONSTRAINT_NAME = 'pets_owner_id_foreign_idx'"));
    assert_eq!(
        statements[1],
        "ALTER TABLE `pets` DROP FOREIGN KEY `pets_owner_id_foreign_idx`"
    );
}

#[tokio::test]
async fn test_remove_constraint_unique_drops_index() {
    let row = Row::new()
        .with("constraint_name", "users_email_uk")
        .with("constraint_type", "UNIQUE")
        .with("table_name", "users");
    let channel = ScriptedChannel::new().respond(Ok(vec![row]));
    let editor = SchemaEditor::new(&channel);

    editor
        .remove_constraint(&TableRef::new("users"), "users_email_uk")
        .await
        .unwrap();

    let statements = channel.statements();
    assert_eq!(statements[1], "DROP INDEX `users_email_uk` ON `users`");
}

#[tokio::test]
async fn test_create_function_three_step_sequence() {
    let channel = ScriptedChannel::new();
    let editor = SchemaEditor::new(&channel);
    let routine = RoutineDefinition::new("add_one", "INTEGER", "sql", "RETURN n + 1;")
        .param(RoutineParam::new("INTEGER").named("n"))
        .option("DETERMINISTIC");

    editor.create_function(&routine).await.unwrap();

    let statements = channel.statements();
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0], "DELIMITER $$");
    assert!(statements[1].starts_with("CREATE FUNCTION `add_one`(n INTEGER)"));
    assert!(statements[1].ends_with("END$$"));
    assert_eq!(statements[2], "DELIMITER ;");
}

#[tokio::test]
async fn test_create_function_aborts_after_body_failure() {
    let channel = ScriptedChannel::new()
        .respond(Ok(Vec::new()))
        .respond(Err(ExecutionError::new("ER_PARSE_ERROR")));
    let editor = SchemaEditor::new(&channel);
    let routine = RoutineDefinition::new("broken", "INTEGER", "sql", "RETURN ;;");

    let error = editor.create_function(&routine).await.unwrap_err();

    assert_eq!(error.to_string(), "ER_PARSE_ERROR");
    // the delimiter restore was never attempted; the session is left
    // switched and recovery is the caller's
    let statements = channel.statements();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0], "DELIMITER $$");
}

#[tokio::test]
async fn test_create_function_validation_sends_nothing() {
    let channel = ScriptedChannel::new();
    let editor = SchemaEditor::new(&channel);
    let routine = RoutineDefinition::new("", "INTEGER", "sql", "RETURN 1;");

    let error = editor.create_function(&routine).await.unwrap_err();

    assert!(matches!(error, SchemaError::Query(_)));
    assert!(channel.statements().is_empty());
}

#[tokio::test]
async fn test_create_function_untyped_param_sends_nothing() {
    let channel = ScriptedChannel::new();
    let editor = SchemaEditor::new(&channel);
    let routine = RoutineDefinition::new("f", "int", "sql", "body").param(RoutineParam {
        name: Some("x".to_string()),
        native_type: None,
        direction: forge_sql_core::routine::ParamDirection::In,
    });

    let error = editor.create_function(&routine).await.unwrap_err();

    assert_eq!(error.to_string(), "function parameter x has no type");
    assert!(channel.statements().is_empty());
}
