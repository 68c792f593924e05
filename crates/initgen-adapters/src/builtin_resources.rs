//! Built-in wrapper-bundle resources.
//!
//! One bundle per toolchain variant: `maven` (no version branching),
//! `gradle3` (legacy) and `gradle4` (modern). Each bundle is launcher
//! script(s) + a properties file + a binary loader jar. The jar payloads
//! here are stand-ins; a deployment replaces them through
//! `InMemoryResourceStore::put_binary` with the real wrapper jars.

/// Built-in text resources as `(location, body)` pairs.
pub fn text_resources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("project/maven/mvnw", MVNW),
        ("project/maven/mvnw.cmd", MVNW_CMD),
        (
            "project/maven/wrapper/maven-wrapper.properties",
            MAVEN_WRAPPER_PROPERTIES,
        ),
        ("project/gradle3/gradlew", GRADLEW),
        ("project/gradle3/gradlew.bat", GRADLEW_BAT),
        (
            "project/gradle3/gradle/wrapper/gradle-wrapper.properties",
            GRADLE3_WRAPPER_PROPERTIES,
        ),
        ("project/gradle4/gradlew", GRADLEW),
        ("project/gradle4/gradlew.bat", GRADLEW_BAT),
        (
            "project/gradle4/gradle/wrapper/gradle-wrapper.properties",
            GRADLE4_WRAPPER_PROPERTIES,
        ),
    ]
}

/// Built-in binary resources as `(location, body)` pairs.
pub fn binary_resources() -> Vec<(&'static str, &'static [u8])> {
    vec![
        (
            "project/maven/wrapper/maven-wrapper.jar",
            MAVEN_WRAPPER_JAR,
        ),
        (
            "project/gradle3/gradle/wrapper/gradle-wrapper.jar",
            GRADLE_WRAPPER_JAR,
        ),
        (
            "project/gradle4/gradle/wrapper/gradle-wrapper.jar",
            GRADLE_WRAPPER_JAR,
        ),
    ]
}

const MVNW: &str = r#"#!/bin/sh
# Maven wrapper launcher
MAVEN_PROJECTBASEDIR="$(pwd)"
exec java -classpath "$MAVEN_PROJECTBASEDIR/.mvn/wrapper/maven-wrapper.jar" \
  org.apache.maven.wrapper.MavenWrapperMain "$@"
"#;

const MVNW_CMD: &str = r#"@echo off
set MAVEN_PROJECTBASEDIR=%CD%
java -classpath "%MAVEN_PROJECTBASEDIR%\.mvn\wrapper\maven-wrapper.jar" org.apache.maven.wrapper.MavenWrapperMain %*
"#;

const MAVEN_WRAPPER_PROPERTIES: &str = r#"distributionUrl=https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/3.5.2/apache-maven-3.5.2-bin.zip
"#;

const GRADLEW: &str = r#"#!/usr/bin/env sh
# Gradle wrapper launcher
APP_HOME="$(pwd)"
CLASSPATH=$APP_HOME/gradle/wrapper/gradle-wrapper.jar
exec java -classpath "$CLASSPATH" org.gradle.wrapper.GradleWrapperMain "$@"
"#;

const GRADLEW_BAT: &str = r#"@echo off
set APP_HOME=%CD%
set CLASSPATH=%APP_HOME%\gradle\wrapper\gradle-wrapper.jar
java -classpath "%CLASSPATH%" org.gradle.wrapper.GradleWrapperMain %*
"#;

const GRADLE3_WRAPPER_PROPERTIES: &str = r#"distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
distributionUrl=https\://services.gradle.org/distributions/gradle-3.5.1-bin.zip
"#;

const GRADLE4_WRAPPER_PROPERTIES: &str = r#"distributionBase=GRADLE_USER_HOME
distributionPath=wrapper/dists
zipStoreBase=GRADLE_USER_HOME
zipStorePath=wrapper/dists
distributionUrl=https\://services.gradle.org/distributions/gradle-4.2.1-bin.zip
"#;

// Zip local-file-header magic keeps these recognizably jar-shaped.
const MAVEN_WRAPPER_JAR: &[u8] = &[0x50, 0x4b, 0x03, 0x04, 0x6d, 0x76, 0x6e];
const GRADLE_WRAPPER_JAR: &[u8] = &[0x50, 0x4b, 0x03, 0x04, 0x67, 0x72, 0x61];
