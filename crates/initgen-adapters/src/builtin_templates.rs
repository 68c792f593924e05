//! Built-in template sources.
//!
//! These are the fixed templates the renderer ships with: build
//! descriptors, the application/test class skeletons per language, and the
//! generated `.gitignore`. Placeholders use `{{key}}` syntax and resolve
//! against the template model.

/// All built-in templates as `(name, source)` pairs.
pub fn all() -> Vec<(&'static str, &'static str)> {
    vec![
        ("starter-pom.xml", STARTER_POM),
        ("starter-build.gradle", STARTER_BUILD_GRADLE),
        ("starter-settings.gradle", STARTER_SETTINGS_GRADLE),
        ("gitignore.tmpl", GITIGNORE),
        ("Application.java", APPLICATION_JAVA),
        ("Application.kt", APPLICATION_KT),
        ("Application.groovy", APPLICATION_GROOVY),
        ("ServletInitializer.java", SERVLET_INITIALIZER_JAVA),
        ("ServletInitializer.kt", SERVLET_INITIALIZER_KT),
        ("ServletInitializer.groovy", SERVLET_INITIALIZER_GROOVY),
        ("ApplicationTests.java", APPLICATION_TESTS_JAVA),
        ("ApplicationTests.kt", APPLICATION_TESTS_KT),
        ("ApplicationTests.groovy", APPLICATION_TESTS_GROOVY),
    ]
}

const STARTER_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
	xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
	<modelVersion>4.0.0</modelVersion>

	<groupId>{{groupId}}</groupId>
	<artifactId>{{artifactId}}</artifactId>
	<version>{{version}}</version>
	<packaging>{{packaging}}</packaging>

	<name>{{name}}</name>
	<description>{{description}}</description>

	<parent>
		<groupId>org.springframework.boot</groupId>
		<artifactId>spring-boot-starter-parent</artifactId>
		<version>{{bootVersion}}</version>
		<relativePath/> <!-- lookup parent from repository -->
	</parent>

	<properties>
		<project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
		<project.reporting.outputEncoding>UTF-8</project.reporting.outputEncoding>
		<java.version>{{javaVersion}}</java.version>
	</properties>

	<dependencies>
		<dependency>
			<groupId>org.springframework.boot</groupId>
			<artifactId>spring-boot-starter</artifactId>
		</dependency>
		<dependency>
			<groupId>org.springframework.boot</groupId>
			<artifactId>spring-boot-starter-test</artifactId>
			<scope>test</scope>
		</dependency>
	</dependencies>

	<build>
		<plugins>
			<plugin>
				<groupId>org.springframework.boot</groupId>
				<artifactId>spring-boot-maven-plugin</artifactId>
			</plugin>
		</plugins>
	</build>

</project>
"#;

const STARTER_BUILD_GRADLE: &str = r#"buildscript {
	ext {
		springBootVersion = '{{bootVersion}}'
	}
	repositories {
		mavenCentral()
	}
	dependencies {
		classpath("org.springframework.boot:spring-boot-gradle-plugin:${springBootVersion}")
	}
}

apply plugin: 'java'
apply plugin: 'org.springframework.boot'

group = '{{groupId}}'
version = '{{version}}'
sourceCompatibility = {{javaVersion}}

repositories {
	mavenCentral()
}

dependencies {
	implementation('org.springframework.boot:spring-boot-starter')
	testImplementation('org.springframework.boot:spring-boot-starter-test')
}
"#;

const STARTER_SETTINGS_GRADLE: &str = r#"rootProject.name = '{{artifactId}}'
"#;

const GITIGNORE: &str = r#".gradle
/build/
!gradle/wrapper/gradle-wrapper.jar
target/
!.mvn/wrapper/maven-wrapper.jar

### STS ###
.apt_generated
.classpath
.factorypath
.project
.settings
.springBeans
.sts4-cache

### IntelliJ IDEA ###
.idea
*.iws
*.iml
*.ipr

### NetBeans ###
/nbproject/private/
/build/
/nbbuild/
/dist/
/nbdist/
/.nb-gradle/
"#;

const APPLICATION_JAVA: &str = r#"package {{packageName}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{applicationName}} {

	public static void main(String[] args) {
		SpringApplication.run({{applicationName}}.class, args);
	}
}
"#;

const APPLICATION_KT: &str = r#"package {{packageName}}

import org.springframework.boot.autoconfigure.SpringBootApplication
import org.springframework.boot.runApplication

@SpringBootApplication
class {{applicationName}}

fun main(args: Array<String>) {
	runApplication<{{applicationName}}>(*args)
}
"#;

const APPLICATION_GROOVY: &str = r#"package {{packageName}}

import org.springframework.boot.SpringApplication
import org.springframework.boot.autoconfigure.SpringBootApplication

@SpringBootApplication
class {{applicationName}} {

	static void main(String[] args) {
		SpringApplication.run {{applicationName}}, args
	}
}
"#;

const SERVLET_INITIALIZER_JAVA: &str = r#"package {{packageName}};

import org.springframework.boot.builder.SpringApplicationBuilder;
import org.springframework.boot.web.servlet.support.SpringBootServletInitializer;

public class ServletInitializer extends SpringBootServletInitializer {

	@Override
	protected SpringApplicationBuilder configure(SpringApplicationBuilder application) {
		return application.sources({{applicationName}}.class);
	}
}
"#;

const SERVLET_INITIALIZER_KT: &str = r#"package {{packageName}}

import org.springframework.boot.builder.SpringApplicationBuilder
import org.springframework.boot.web.servlet.support.SpringBootServletInitializer

class ServletInitializer : SpringBootServletInitializer() {

	override fun configure(application: SpringApplicationBuilder): SpringApplicationBuilder {
		return application.sources({{applicationName}}::class.java)
	}
}
"#;

const SERVLET_INITIALIZER_GROOVY: &str = r#"package {{packageName}}

import org.springframework.boot.builder.SpringApplicationBuilder
import org.springframework.boot.web.servlet.support.SpringBootServletInitializer

class ServletInitializer extends SpringBootServletInitializer {

	@Override
	protected SpringApplicationBuilder configure(SpringApplicationBuilder application) {
		application.sources({{applicationName}})
	}
}
"#;

const APPLICATION_TESTS_JAVA: &str = r#"package {{packageName}};

import org.junit.Test;
import org.junit.runner.RunWith;
import org.springframework.boot.test.context.SpringBootTest;
import org.springframework.test.context.junit4.SpringRunner;

@RunWith(SpringRunner.class)
@SpringBootTest
public class {{applicationName}}Tests {

	@Test
	public void contextLoads() {
	}
}
"#;

const APPLICATION_TESTS_KT: &str = r#"package {{packageName}}

import org.junit.Test
import org.junit.runner.RunWith
import org.springframework.boot.test.context.SpringBootTest
import org.springframework.test.context.junit4.SpringRunner

@RunWith(SpringRunner::class)
@SpringBootTest
class {{applicationName}}Tests {

	@Test
	fun contextLoads() {
	}
}
"#;

const APPLICATION_TESTS_GROOVY: &str = r#"package {{packageName}}

import org.junit.Test
import org.junit.runner.RunWith
import org.springframework.boot.test.context.SpringBootTest
import org.springframework.test.context.junit4.SpringRunner

@RunWith(SpringRunner)
@SpringBootTest
class {{applicationName}}Tests {

	@Test
	void contextLoads() {
	}
}
"#;
