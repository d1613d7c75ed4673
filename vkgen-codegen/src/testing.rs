//! Schema fixtures shared by tests across the workspace.

use serde_json::{Value, json};
use vkgen_schema::Schema;

/// Build a schema from an inline JSON value.
///
/// # Panics
///
/// Panics if the value is not a valid schema document.
pub fn schema(value: Value) -> Schema {
    serde_json::from_value(value).expect("invalid test schema")
}

/// A small schema shaped like the upstream VK API description.
///
/// Covers inheritance through `allOf`, integer and string enums, a type
/// union, a self-referencing class, response envelopes and methods in two
/// scopes.
pub fn sample_schema() -> Schema {
    schema(sample_schema_json())
}

/// The raw document behind [`sample_schema`].
pub fn sample_schema_json() -> Value {
    json!({
        "objects": {
            "base_bool_int": {
                "type": "integer",
                "enum": [0, 1],
                "enumNames": ["no", "yes"]
            },
            "base_sex": {
                "type": "integer",
                "enum": [0, 1, 2],
                "enumNames": ["unknown", "female", "male"]
            },
            "base_object": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "title": {"type": "string"}
                }
            },
            "friends_order": {
                "type": "string",
                "enum": ["hints", "random", "name"]
            },
            "users_user_min": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer", "description": "User ID"},
                    "first_name": {"type": "string"},
                    "deactivated": {"type": "string"}
                }
            },
            "users_user": {
                "allOf": [
                    {"$ref": "#/definitions/users_user_min"},
                    {
                        "properties": {
                            "online": {"$ref": "#/definitions/base_bool_int"},
                            "sex": {"$ref": "#/definitions/base_sex"},
                            "city": {"$ref": "#/definitions/base_object"},
                            "counters": {"type": ["object", "integer"]}
                        }
                    }
                ]
            },
            "groups_group": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"},
                    "type": {"type": "string"}
                }
            },
            "groups_group_full": {
                "allOf": [{"$ref": "#/definitions/groups_group"}],
                "properties": {
                    "members_count": {"type": "integer"}
                }
            },
            "wall_wallpost": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "copy_history": {
                        "type": "array",
                        "items": {"$ref": "#/definitions/wall_wallpost"}
                    },
                    "reply_post": {"$ref": "#/definitions/wall_wallpost"}
                }
            }
        },
        "responses": {
            "base_ok_response": {
                "type": "object",
                "properties": {
                    "response": {"type": "integer", "enum": [1], "enumNames": ["ok"]}
                }
            },
            "friends_get_response": {
                "type": "object",
                "properties": {
                    "response": {
                        "type": "object",
                        "properties": {
                            "count": {"type": "integer"},
                            "items": {"type": "array", "items": {"type": "integer"}}
                        }
                    }
                }
            },
            "users_get_response": {
                "type": "object",
                "properties": {
                    "response": {
                        "type": "array",
                        "items": {"$ref": "objects.json#/definitions/users_user"}
                    }
                }
            }
        },
        "methods": {
            "friends.get": {
                "description": "Returns a list of user IDs of a user's friends.",
                "parameters": [
                    {"name": "user_id", "type": "integer"},
                    {"name": "order", "$ref": "objects.json#/definitions/friends_order"},
                    {"name": "count", "type": "integer"},
                    {"name": "fields", "type": "array", "items": {"type": "string"}}
                ],
                "responses": {
                    "response": {"$ref": "responses.json#/definitions/friends_get_response"}
                }
            },
            "friends.add": {
                "parameters": [
                    {"name": "user_id", "type": "integer", "required": true},
                    {"name": "text", "type": "string"},
                    {"name": "follow", "type": "boolean"}
                ],
                "responses": {
                    "response": {"$ref": "responses.json#/definitions/base_ok_response"}
                }
            },
            "users.get": {
                "parameters": [
                    {"name": "user_ids", "type": "array", "items": {"type": "string"}},
                    {"name": "fields", "type": "array", "items": {"type": "string"}}
                ],
                "responses": {
                    "response": {"$ref": "responses.json#/definitions/users_get_response"}
                }
            }
        }
    })
}
