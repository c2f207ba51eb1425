// Canned file catalog for the content generator.
//
// Each category lists (file name, title) pairs plus a renderer that expands
// the title into a full file body. The bodies simulate a Next.js/TypeScript
// project and carry no functional value by design of the bot.

pub const README_NAME: &str = "README.md";

pub const README_BOILERPLATE: &str = "\
# Clinic Portal

A modern healthcare management system built with Next.js and TypeScript.

## Features

- Patient management
- Appointment scheduling
- Medical records
- Billing and invoicing
- Staff management
- Reporting and analytics

## Getting Started

1. Clone the repository
2. Install dependencies: `npm install`
3. Run the development server: `npm run dev`
4. Open [http://localhost:3000](http://localhost:3000)

## Tech Stack

- Next.js 14
- TypeScript
- Tailwind CSS
- Prisma ORM
- PostgreSQL
- NextAuth.js

## Contributing

Please read our contributing guidelines before submitting pull requests.

## License

MIT License - see LICENSE file for details.
";

/// Appendable README sections. A run appends at most one, and only when none
/// of the three is already present.
pub const README_SECTIONS: &[&str] = &[
    "\n## Recent Updates\n\n\
     - Improved performance and user experience\n\
     - Enhanced security features\n\
     - Better error handling and logging\n\
     - Updated dependencies for security patches\n",
    "\n## Development\n\n\
     - Added comprehensive test coverage\n\
     - Improved code documentation\n\
     - Enhanced build process\n\
     - Better development workflow\n",
    "\n## Deployment\n\n\
     - Optimized for production deployment\n\
     - Enhanced monitoring and logging\n\
     - Improved error tracking\n\
     - Better performance metrics\n",
];

/// Script keys offered to `package.json`, in insertion order.
pub const PACKAGE_SCRIPTS: &[(&str, &str)] = &[
    ("lint:fix", "next lint --fix"),
    ("type-check", "tsc --noEmit"),
    ("format", "prettier --write ."),
    ("test:watch", "jest --watch"),
];

/// Lint rules offered to `.eslintrc.json`, in insertion order.
pub const ESLINT_RULES: &[(&str, &str)] = &[
    ("no-console", "warn"),
    ("prefer-const", "error"),
    ("no-unused-vars", "warn"),
];

/// Block spliced into `next.config.ts` when no `experimental` key exists.
pub const NEXT_CONFIG_ANCHOR: &str = "const nextConfig = {";
pub const NEXT_CONFIG_SPLICE: &str = "const nextConfig = {\n  \
     experimental: {\n    \
     optimizePackageImports: ['@radix-ui/react-icons'],\n  \
     },";

pub const DOC_FILES: &[(&str, &str)] = &[
    ("API.md", "API Documentation"),
    ("DEPLOYMENT.md", "Deployment Guide"),
    ("CONTRIBUTING.md", "Contributing Guidelines"),
    ("CHANGELOG.md", "Changelog"),
];

pub fn doc_body(title: &str) -> String {
    format!(
        "# {title}\n\n\
         This document provides information about {lower}.\n\n\
         ## Overview\n\n\
         {title} is an important part of our development process.\n\n\
         ## Details\n\n\
         - Feature 1: Description\n\
         - Feature 2: Description\n\
         - Feature 3: Description\n\n\
         ## Usage\n\n\
         Instructions for using this feature.\n\n\
         ## Notes\n\n\
         Additional notes and considerations.\n",
        lower = title.to_lowercase(),
    )
}

pub const TEST_FILES: &[(&str, &str)] = &[
    ("utils.test.ts", "Utility functions"),
    ("components.test.tsx", "React components"),
    ("api.test.ts", "API endpoints"),
    ("auth.test.ts", "Authentication"),
];

pub fn test_body(description: &str) -> String {
    format!(
        "import {{ describe, it, expect }} from 'vitest';\n\n\
         describe('{description}', () => {{\n  \
         it('should work correctly', () => {{\n    \
         expect(true).toBe(true);\n  \
         }});\n\n  \
         it('should handle edge cases', () => {{\n    \
         const input = 'test';\n    \
         expect(input).toBeDefined();\n  \
         }});\n\n  \
         it('should return expected results', () => {{\n    \
         const result = 2 + 2;\n    \
         expect(result).toBe(4);\n  \
         }});\n\
         }});\n"
    )
}

pub const UTIL_FILES: &[(&str, &str)] = &[
    ("helpers.ts", "Helper functions"),
    ("validation.ts", "Validation utilities"),
    ("formatting.ts", "Formatting utilities"),
    ("constants.ts", "Application constants"),
];

pub fn util_body(description: &str) -> String {
    format!(
        "// {description}\n\n\
         export function formatDate(date: Date): string {{\n  \
         return date.toLocaleDateString();\n\
         }}\n\n\
         export function validateEmail(email: string): boolean {{\n  \
         const emailRegex = /^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$/;\n  \
         return emailRegex.test(email);\n\
         }}\n\n\
         export function capitalize(str: string): string {{\n  \
         return str.charAt(0).toUpperCase() + str.slice(1);\n\
         }}\n"
    )
}

pub const STYLE_FILES: &[(&str, &str)] = &[
    ("components.css", "Component styles"),
    ("utilities.css", "Utility classes"),
    ("themes.css", "Theme definitions"),
    ("animations.css", "Animation keyframes"),
];

pub fn style_body(description: &str) -> String {
    format!(
        "/* {description} */\n\n\
         .custom-button {{\n  \
         padding: 0.5rem 1rem;\n  \
         border-radius: 0.375rem;\n  \
         font-weight: 500;\n  \
         transition: all 0.2s ease-in-out;\n\
         }}\n\n\
         .fade-in {{\n  \
         animation: fadeIn 0.3s ease-in-out;\n\
         }}\n\n\
         @keyframes fadeIn {{\n  \
         from {{\n    \
         opacity: 0;\n    \
         transform: translateY(10px);\n  \
         }}\n  \
         to {{\n    \
         opacity: 1;\n    \
         transform: translateY(0);\n  \
         }}\n\
         }}\n\n\
         .responsive-container {{\n  \
         max-width: 1200px;\n  \
         margin: 0 auto;\n  \
         padding: 0 1rem;\n\
         }}\n"
    )
}

pub const COMPONENT_FILES: &[(&str, &str)] = &[
    ("Button.tsx", "Button"),
    ("Card.tsx", "Card"),
    ("Modal.tsx", "Modal"),
    ("Loading.tsx", "Loading"),
];

pub fn component_body(name: &str) -> String {
    format!(
        "import React from 'react';\n\n\
         interface {name}Props {{\n  \
         children?: React.ReactNode;\n  \
         className?: string;\n  \
         onClick?: () => void;\n\
         }}\n\n\
         export function {name}({{ children, className = '', onClick }}: {name}Props) {{\n  \
         return (\n    \
         <div className={{`{lower}-component ${{className}}`}} onClick={{onClick}}>\n      \
         {{children}}\n    \
         </div>\n  \
         );\n\
         }}\n",
        lower = name.to_lowercase(),
    )
}
