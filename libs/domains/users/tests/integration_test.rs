//! Users domain against real PostgreSQL.
//!
//! Each test boots a testcontainers Postgres and applies the migrations,
//! so repository statements, service transactions, database-assigned
//! timestamps and concurrent access run exactly as in production.

use domain_users::*;
use test_utils::{assertions::*, TestDatabase, TestDataBuilder};

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_and_get_user() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let repo = PgUserRepository::new(&conn);
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let name = builder.name("Anna");
    let surname = builder.name("Smith");

    let created = repo
        .create(name.clone(), surname.clone(), "hash".to_string())
        .await
        .unwrap();

    assert!(created.id > 0, "database should assign the id");
    assert_eq!(created.name, name);
    assert_eq!(created.surname, surname);
    assert_eq!(created.hashed_password, "hash");
    assert_eq!(
        created.created_at, created.updated_at,
        "fresh rows share one timestamp"
    );

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "user should exist");

    assert_id_eq(retrieved.id, created.id, "retrieved user id");
    assert_eq!(retrieved.name, created.name);
}

#[tokio::test]
async fn test_get_missing_user_returns_none() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let repo = PgUserRepository::new(&conn);

    let result = repo.get_by_id(424242).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_touches_updated_at() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let repo = PgUserRepository::new(&conn);
    let builder = TestDataBuilder::from_test_name("touch_updated_at");

    let created = repo
        .create(builder.name("Ivan"), builder.name("Petrov"), "hash".to_string())
        .await
        .unwrap();

    let changes = UpdateUser {
        surname: Some(builder.name("Sidorov")),
        ..Default::default()
    };
    let updated = repo.update(created.id, &changes).await.unwrap();
    let updated = assert_some(updated, "update should return the row");

    assert_eq!(updated.name, created.name, "name was not supplied");
    assert_eq!(updated.surname, builder.name("Sidorov"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(
        updated.updated_at > created.updated_at,
        "update should advance updated_at"
    );
}

#[tokio::test]
async fn test_delete_returns_the_id_once() {
    let db = TestDatabase::new().await;
    let conn = db.connection();
    let repo = PgUserRepository::new(&conn);
    let builder = TestDataBuilder::from_test_name("delete_once");

    let created = repo
        .create(builder.name("Olga"), builder.name("Orlova"), "hash".to_string())
        .await
        .unwrap();

    let deleted = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted, Some(created.id));

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    assert!(retrieved.is_none(), "user should be deleted");

    let deleted_again = repo.delete(created.id).await.unwrap();
    assert!(deleted_again.is_none(), "second delete should find nothing");
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_service_create_hashes_the_password() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("service_hashes");

    let input = CreateUser {
        name: builder.name("Anna"),
        surname: builder.name("Smith"),
        password: "plaintext-secret".to_string(),
    };

    let created = service.create_user(input).await.unwrap();

    // The stored hash must be Argon2, never the plain password
    let conn = db.connection();
    let stored = PgUserRepository::new(&conn)
        .get_by_id(created.id)
        .await
        .unwrap();
    let stored = assert_some(stored, "created user should be stored");

    assert_ne!(stored.hashed_password, "plaintext-secret");
    assert!(stored.hashed_password.starts_with("$argon2"));
}

#[tokio::test]
async fn test_service_rejects_invalid_names() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());

    let input = CreateUser {
        name: "Anna1".to_string(),
        surname: "Smith".to_string(),
        password: "secret".to_string(),
    };

    let result = service.create_user(input).await;
    assert!(
        matches!(&result, Err(UserError::Validation(msg)) if msg == "Name should contain only letters"),
        "expected name validation error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_service_get_all_users_in_id_order() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("get_all_ordered");

    for prefix in ["Anna", "Boris", "Clara"] {
        let input = CreateUser {
            name: builder.name(prefix),
            surname: builder.name("Tester"),
            password: "secret".to_string(),
        };
        service.create_user(input).await.unwrap();
    }

    let users = service.get_all_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert!(
        users.windows(2).all(|pair| pair[0].id < pair[1].id),
        "listing should be ordered by id"
    );
}

#[tokio::test]
async fn test_service_update_missing_user_is_not_found() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());

    let changes = UpdateUser {
        name: Some("Ivan".to_string()),
        ..Default::default()
    };
    let result = service.update_user(424242, changes).await;

    assert!(
        matches!(result, Err(UserError::NotFound(424242))),
        "expected NotFound, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_service_empty_update_beats_not_found() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());

    // Even for an id that does not exist, the empty update is rejected first
    let result = service.update_user(424242, UpdateUser::default()).await;

    assert!(
        matches!(
            &result,
            Err(UserError::Validation(msg))
                if msg == "At least one parameter for user update info should be provided"
        ),
        "expected validation error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_service_delete_missing_user_is_not_found() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());

    let result = service.delete_user(424242).await;
    assert!(
        matches!(result, Err(UserError::NotFound(424242))),
        "expected NotFound, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_service_delete_returns_deleted_id() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("service_delete");

    let created = service
        .create_user(CreateUser {
            name: builder.name("Maria"),
            surname: builder.name("Ivanova"),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    let deleted = service.delete_user(created.id).await.unwrap();
    assert_id_eq(deleted.deleted_user_id, created.id, "deleted user id");

    let result = service.get_user(created.id).await;
    assert!(matches!(result, Err(UserError::NotFound(_))));
}

// ---------------------------------------------------------------------------
// Concurrent access
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_concurrent_creates() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("concurrent_creates");

    let mut handles = vec![];
    for prefix in ["Anna", "Boris", "Clara", "Dmitri", "Elena"] {
        let service_clone = service.clone();
        let name = builder.name(prefix);
        let surname = builder.name("Tester");

        let handle = tokio::spawn(async move {
            service_clone
                .create_user(CreateUser {
                    name,
                    surname,
                    password: "secret".to_string(),
                })
                .await
        });

        handles.push(handle);
    }

    let results: Vec<_> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(results.len(), 5);
    for result in results {
        assert!(result.is_ok(), "concurrent create should succeed");
    }

    let all_users = service.get_all_users().await.unwrap();
    assert_eq!(all_users.len(), 5, "all users should be created");
}

#[tokio::test]
async fn test_concurrent_update_and_delete() {
    let db = TestDatabase::new().await;
    let service = UserService::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_vs_delete");

    let created = service
        .create_user(CreateUser {
            name: builder.name("Nina"),
            surname: builder.name("Volkova"),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    let update_service = service.clone();
    let delete_service = service.clone();
    let user_id = created.id;

    let (update_result, delete_result) = tokio::join!(
        update_service.update_user(
            user_id,
            UpdateUser {
                name: Some("Vera".to_string()),
                ..Default::default()
            },
        ),
        delete_service.delete_user(user_id),
    );

    // The delete wins; the update either landed before it or observed the gone row
    let deleted = delete_result.unwrap();
    assert_id_eq(deleted.deleted_user_id, user_id, "deleted user id");
    assert!(
        update_result.is_ok() || matches!(update_result, Err(UserError::NotFound(_))),
        "update must either succeed or report NotFound, got {:?}",
        update_result
    );

    let result = service.get_user(user_id).await;
    assert!(matches!(result, Err(UserError::NotFound(_))));
}
