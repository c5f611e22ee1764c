// ABOUTME: Integration tests for configuration parsing and validation.
// ABOUTME: Tests YAML parsing, defaults, discovery, and environment resolution.

use std::fs;
use std::time::Duration;
use webship::config::*;
use webship::error::Error;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
servers:
  production:
    name: Production
    type: vercel
    domain: hopeharmony.org
    environment_variables:
      NODE_ENV: production
      NEXT_PUBLIC_SITE_URL: https://hopeharmony.org
    build_settings:
      build_command: npm run build
      port: 3000
  development:
    name: Development
    type: local
    build_settings:
      dev_command: npm run dev
      port: 5173

storage:
  static_files:
    - index.html
    - public/favicon.ico

deployment_scripts:
  pre_deploy:
    - npm ci
    - npm run lint
  post_deploy:
    - echo "deployed"

monitoring:
  health_check:
    endpoint: /api/health
    timeout: 5s
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert_eq!(config.servers.len(), 2);
        let production = config.resolve("production").unwrap();
        assert!(production.is_production());
        assert_eq!(production.platform_label(), "vercel");
        assert_eq!(production.domain(), Some("hopeharmony.org"));
        assert_eq!(
            production.environment_variables.get("NODE_ENV"),
            Some(&EnvValue::Literal("production".to_string()))
        );

        let development = config.resolve("development").unwrap();
        assert_eq!(development.build_settings.port, 5173);
        assert_eq!(development.build_settings.build_command, "npm run build");

        assert_eq!(config.storage.static_files.len(), 2);
        assert_eq!(config.deployment_scripts.pre_deploy, vec!["npm ci", "npm run lint"]);
        assert_eq!(config.deployment_scripts.post_deploy.len(), 1);
        assert_eq!(config.monitoring.health_check.endpoint, "/api/health");
        assert_eq!(config.monitoring.health_check.timeout, Duration::from_secs(5));
    }

    #[test]
    fn defaults_for_missing_sections() {
        let yaml = r#"
servers:
  production:
    type: hosted
"#;
        let config = Config::from_yaml(yaml).unwrap();

        assert!(config.storage.static_files.is_empty());
        assert_eq!(
            config.storage.build_manifest.as_deref(),
            Some(std::path::Path::new("package.json"))
        );
        assert!(config.deployment_scripts.pre_deploy.is_empty());
        assert!(config.deployment_scripts.post_deploy.is_empty());
        assert_eq!(config.monitoring.health_check.endpoint, DEFAULT_HEALTH_ENDPOINT);
        assert_eq!(config.monitoring.health_check.timeout, Duration::from_secs(10));

        let settings = &config.resolve("production").unwrap().build_settings;
        assert_eq!(settings.build_command, "npm run build");
        assert_eq!(settings.dev_command, "npm run dev");
        assert_eq!(settings.port, 3000);
    }

    #[test]
    fn partial_build_settings_keep_other_defaults() {
        let yaml = r#"
servers:
  development:
    type: local
    build_settings:
      port: 8080
"#;
        let config = Config::from_yaml(yaml).unwrap();
        let settings = &config.resolve("development").unwrap().build_settings;
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.dev_command, "npm run dev");
    }

    #[test]
    fn environment_order_is_preserved() {
        let yaml = r#"
servers:
  zeta: { type: hosted }
  alpha: { type: local }
  mid: { type: hosted }
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.environment_names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_environment_names_are_rejected() {
        let yaml = r#"
servers:
  production: { type: hosted }
  production: { type: local }
"#;
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(
            err.to_string().to_lowercase().contains("duplicate"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn null_servers_is_empty() {
        let config = Config::from_yaml("servers:\n").unwrap();
        assert!(config.servers.is_empty());
    }

    #[test]
    fn missing_servers_is_empty() {
        let config = Config::from_yaml("storage:\n  static_files: []\n").unwrap();
        assert!(config.servers.is_empty());
    }

    #[test]
    fn servers_must_be_a_mapping() {
        let err = Config::from_yaml("servers: production\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn unknown_type_parses() {
        let yaml = r#"
servers:
  legacy:
    type: ftp
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.resolve("legacy").unwrap().platform_label(), "ftp");
    }

    #[test]
    fn scalar_variable_values_become_strings() {
        let yaml = r#"
servers:
  production:
    type: hosted
    environment_variables:
      PORT: 8080
      DEBUG: false
      RATIO: 0.5
"#;
        let config = Config::from_yaml(yaml).unwrap();
        let vars = &config.resolve("production").unwrap().environment_variables;
        assert_eq!(vars.get("PORT"), Some(&EnvValue::Literal("8080".to_string())));
        assert_eq!(vars.get("DEBUG"), Some(&EnvValue::Literal("false".to_string())));
        assert_eq!(vars.get("RATIO"), Some(&EnvValue::Literal("0.5".to_string())));
    }

    #[test]
    fn disabled_build_manifest() {
        let yaml = r#"
storage:
  build_manifest: null
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.storage.build_manifest, None);
    }
}

mod resolution {
    use super::*;

    fn two_environments() -> Config {
        Config::from_yaml(
            r#"
servers:
  production: { type: hosted, domain: example.org }
  development: { type: local }
"#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_known_environment() {
        let config = two_environments();
        let spec = config.resolve("production").unwrap();
        assert_eq!(spec.domain(), Some("example.org"));
    }

    #[test]
    fn unknown_environment_lists_every_name() {
        let config = two_environments();
        let err = config.resolve("staging-typo").unwrap_err();

        assert_eq!(err.name, "staging-typo");
        assert_eq!(err.available, vec!["production", "development"]);
        let message = err.to_string();
        assert!(message.contains("production"));
        assert!(message.contains("development"));
    }

    #[test]
    fn lookup_is_by_key_not_label() {
        let config = Config::from_yaml(
            r#"
servers:
  production: { name: Production, type: hosted }
"#,
        )
        .unwrap();
        assert!(config.resolve("Production").is_err());
    }
}

mod env_values {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn env_reference_without_default() {
        let yaml = r#"
servers:
  production:
    environment_variables:
      SECRET:
        env: SECRET_VAR
"#;
        let config = Config::from_yaml(yaml).unwrap();
        match config
            .resolve("production")
            .unwrap()
            .environment_variables
            .get("SECRET")
        {
            Some(EnvValue::FromEnv { var, default: None }) => {
                assert_eq!(var, "SECRET_VAR");
            }
            other => panic!("Expected FromEnv variant, got {other:?}"),
        }
    }

    #[test]
    fn resolve_env_values() {
        let mut env_map = BTreeMap::new();
        env_map.insert("KEY".to_string(), EnvValue::Literal("literal".to_string()));
        env_map.insert(
            "FROM_ENV".to_string(),
            EnvValue::FromEnv {
                var: "WEBSHIP_TEST_VAR".to_string(),
                default: None,
            },
        );
        env_map.insert(
            "WITH_DEFAULT".to_string(),
            EnvValue::FromEnv {
                var: "WEBSHIP_MISSING_VAR".to_string(),
                default: Some("default_value".to_string()),
            },
        );

        temp_env::with_vars(
            [
                ("WEBSHIP_TEST_VAR", Some("from_environment")),
                ("WEBSHIP_MISSING_VAR", None),
            ],
            || {
                let resolved = resolve_env_map(&env_map).unwrap();

                assert_eq!(resolved.get("KEY"), Some(&"literal".to_string()));
                assert_eq!(
                    resolved.get("FROM_ENV"),
                    Some(&"from_environment".to_string())
                );
                assert_eq!(
                    resolved.get("WITH_DEFAULT"),
                    Some(&"default_value".to_string())
                );
            },
        );
    }

    #[test]
    fn missing_reference_without_default_fails() {
        let mut env_map = BTreeMap::new();
        env_map.insert(
            "TOKEN".to_string(),
            EnvValue::FromEnv {
                var: "WEBSHIP_ABSENT_TOKEN".to_string(),
                default: None,
            },
        );

        temp_env::with_var_unset("WEBSHIP_ABSENT_TOKEN", || {
            let err = resolve_env_map(&env_map).unwrap_err();
            assert!(matches!(err, Error::MissingEnvVar(ref var) if var == "WEBSHIP_ABSENT_TOKEN"));
        });
    }
}

mod loading {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("deployment.yml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn unparsable_file_is_config_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployment.yml");
        fs::write(&path, "servers: [unclosed").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigMalformed { .. }));
        assert!(err.to_string().contains("deployment.yml"));
    }

    #[test]
    fn discover_prefers_yml() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "servers:\n  from-yml: { type: hosted }\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME_ALT),
            "servers:\n  from-yaml: { type: hosted }\n",
        )
        .unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.environment_names(), vec!["from-yml"]);
    }

    #[test]
    fn discover_falls_back_to_yaml_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME_ALT),
            "servers:\n  production: { type: hosted }\n",
        )
        .unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert!(config.servers.contains("production"));
    }

    #[test]
    fn discover_without_config_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }
}
