//! Read-only content catalog backing the portfolio API.
//!
//! The catalog is a fixed data set with no write path. It is meant to be
//! loaded once at process start and shared behind an `Arc`; no
//! synchronization is needed because nothing ever mutates it.

use serde::{Deserialize, Serialize};

/// A portfolio project entry.
///
/// `featured` marks the projects rendered into the resume's Key Projects
/// section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub details: Vec<String>,
    pub github_url: String,
    pub featured: bool,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        title: &str,
        description: &str,
        tech: &[&str],
        details: &[&str],
        github_url: &str,
        featured: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|s| s.to_string()).collect(),
            details: details.iter().map(|s| s.to_string()).collect(),
            github_url: github_url.to_string(),
            featured,
        }
    }
}

/// One tool inside a skill category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTool {
    pub name: String,
    pub icon: String,
    pub wikipedia_url: String,
}

/// A named group of related tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub tools: Vec<SkillTool>,
}

impl SkillCategory {
    fn new(id: &str, title: &str, icon: &str, tools: &[(&str, &str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
            tools: tools
                .iter()
                .map(|(name, icon, url)| SkillTool {
                    name: name.to_string(),
                    icon: icon.to_string(),
                    wikipedia_url: url.to_string(),
                })
                .collect(),
        }
    }
}

/// A certification or competition result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub year: String,
    pub description: String,
    pub status: String,
    pub status_color: String,
    pub icon: String,
}

impl Certification {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        title: &str,
        provider: &str,
        year: &str,
        description: &str,
        status: &str,
        status_color: &str,
        icon: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            provider: provider.to_string(),
            year: year.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            status_color: status_color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// An internship or work placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

impl Experience {
    fn new(id: &str, title: &str, company: &str, duration: &str, achievements: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            duration: duration.to_string(),
            achievements: achievements.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A gallery certificate/photo entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_path: String,
    pub category: String,
    pub date: String,
}

impl GalleryItem {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        image_path: &str,
        category: &str,
        date: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_path: image_path.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }
}

/// Education summary rendered into the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub detail: String,
}

/// Biographical facts shared by the site header and the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub education: Education,
}

/// The whole content catalog: profile plus all display collections,
/// each in its fixed presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
    pub experience: Vec<Experience>,
    pub gallery: Vec<GalleryItem>,
}

impl Catalog {
    /// The built-in data set served by the site.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Prathamesh Santosh Pendkar".to_string(),
                email: "prathameshpendkar@gmail.com".to_string(),
                phone: "+91-8390088075".to_string(),
                location: "Pune, India".to_string(),
                linkedin: "linkedin.com/in/prathamesh-pendkar".to_string(),
                github: "github.com/Prathameshpendkar2005".to_string(),
                summary: "Cybersecurity professional with expertise in penetration testing, \
                          vulnerability assessment, and cloud security. Proven track record in \
                          SOC monitoring, digital forensics, and security automation. AWS \
                          certified with hands-on experience in bug bounty programs and VAPT \
                          methodologies."
                    .to_string(),
                education: Education {
                    degree: "Bachelor of Technology in Computer Science & Engineering".to_string(),
                    school: "Symbiosis Skills & Professional University, Pune".to_string(),
                    detail: "CGPA: 8.9/10 | Expected 2026".to_string(),
                },
            },
            projects: Self::builtin_projects(),
            skills: Self::builtin_skills(),
            certifications: Self::builtin_certifications(),
            experience: Self::builtin_experience(),
            gallery: Self::builtin_gallery(),
        }
    }

    fn builtin_projects() -> Vec<Project> {
        vec![
            Project::new(
                "iot-compliance-scanner",
                "IoT Device Compliance Scanner (NIST-Based)",
                "Built a compliance scanner to evaluate IoT devices against NIST security \
                 standards with secure communication and automated hardening.",
                &["MQTT", "Ansible", "NIST Standards", "TLS", "Python"],
                &[
                    "Secure MQTT Broker with TLS & Access Controls",
                    "Ansible Automation for NIST-Aligned Hardening",
                    "Hardening: SSH, Firewall, Logging & Service Restrictions",
                    "Notion-Ready Compliance Documentation",
                ],
                "https://github.com/Prathameshpendkar2005",
                false,
            ),
            Project::new(
                "opencv-arms-gun-detection",
                "OpenCV-Based Arms and Gun Detection System",
                "Developed real-time arms and gun detection system using OpenCV and Haar \
                 cascade classifiers for weapon threat detection.",
                &["OpenCV", "Python", "Haar Cascades", "CCTV", "Edge Computing"],
                &[
                    "Real-time Detection from Webcam & CCTV Feeds",
                    "Custom Haar Cascade Training for Firearm Recognition",
                    "Multi-scenario Testing: Lighting, Angles, Occlusion",
                    "Alert Mechanism with Event Logging & Screenshots",
                    "Optimized Pipeline for Low-Latency Edge Devices",
                    "Timestamped Forensic Analysis Logging",
                    "Notion-Ready Deployment Guide",
                ],
                "https://github.com/Prathameshpendkar2005",
                false,
            ),
            Project::new(
                "decentra-shield-web3",
                "DecentraShield – AI-Powered Decentralized Security (Web3 Hackathon)",
                "Built a decentralized security framework combining blockchain's transparency \
                 with AI-driven anomaly detection to protect digital identities and DeFi \
                 transactions in real time.",
                &[
                    "Blockchain",
                    "Smart Contracts",
                    "AI/ML",
                    "DeFi",
                    "Solidity",
                    "Python",
                    "TensorFlow",
                ],
                &[
                    "AI-Driven Anomaly Detection for DeFi Transactions",
                    "Blockchain-Based Identity Verification",
                    "Real-Time Threat Detection & Alert System",
                    "Decentralized Architecture for Enhanced Security",
                    "Team: Prathamesh Pendkar, Anisha Miranda, Arya Deshpande, Abhijit Avhad",
                    "TantraFiesta'25 Hackathon (IIIT Nagpur) - DeFAI Track",
                ],
                "https://github.com/Prathameshpendkar2005",
                false,
            ),
            Project::new(
                "threat-detection-lab",
                "ThreatOps Lab: Real-Time Detection with ELK, Zabbix & Wazuh",
                "Simulated a real-world SOC environment using VirtualBox/VMware with ELK \
                 Stack, Zabbix, and Wazuh agents to recreate MITRE ATT&CK-based attack \
                 scenarios and validate detection rules.",
                &[
                    "ELK Stack",
                    "Kibana",
                    "Logstash",
                    "Wazuh",
                    "Zabbix",
                    "VirtualBox",
                    "MITRE ATT&CK",
                ],
                &[
                    "ELK + Wazuh SIEM: Filebeat, Logstash, Kibana dashboards",
                    "Wazuh Agents: SSH brute force, file integrity, privilege escalation detection",
                    "Zabbix Monitoring: CPU, memory, disk, service uptime & port scanning alerts",
                    "MITRE ATT&CK Simulations: Execution, Persistence, Defense Evasion mapped",
                    "Deliverables: Deployment guide, attack playbook, detection rules, screenshots",
                ],
                "https://github.com/Prathameshpendkar2005",
                false,
            ),
            Project::new(
                "aws-security",
                "Secure Web Hosting on AWS EC2",
                "Deployed a web application on EC2 and S3 with custom IAM policies for \
                 least-privilege access and isolation.",
                &["AWS EC2", "S3", "IAM", "VPC", "CloudFront"],
                &[
                    "Security Groups Configuration",
                    "Route 53 DNS Setup",
                    "├─ OS & Server Hardening (SSH, Fail2Ban, firewall)",
                    "├─ WordPress Security (login limits, file permissions)",
                    "├─ Database Security (non-default credentials, Secrets Manager)",
                    "├─ CloudFront WAF & HTTPS (ACM)",
                    "└─ Monitoring (CloudTrail, GuardDuty, Wazuh)",
                ],
                "https://github.com/Prathameshpendkar2005",
                true,
            ),
            Project::new(
                "recon-automation",
                "Recon Automation Bash Script",
                "Automated reconnaissance and vulnerability scanning with endpoint \
                 enumeration and comprehensive reporting.",
                &["Bash", "Nmap", "OWASP ZAP", "FFUF", "WPScan"],
                &[
                    "Subdomain Enumeration",
                    "Port Scanning & Detection",
                    "Automated Report Generation",
                ],
                "https://github.com/Prathameshpendkar2005",
                true,
            ),
            Project::new(
                "tscm-design",
                "TSCM Product Design",
                "Built a hardware-assisted tool to detect hidden surveillance devices with \
                 access control integration.",
                &["Embedded Systems", "RF Detection", "Security Engineering"],
                &[
                    "RF Signal Analysis",
                    "Hardware Integration",
                    "35% Detection Accuracy Improvement",
                ],
                "https://github.com/Prathameshpendkar2005",
                true,
            ),
            Project::new(
                "vulnerability-lab",
                "Web Vulnerability Testing Lab",
                "Created a comprehensive lab to simulate and exploit OWASP Top 10 \
                 vulnerabilities for VAPT practice.",
                &["OWASP Juice Shop", "bWAPP", "Metasploit", "Docker"],
                &[
                    "OWASP Top 10 Simulations",
                    "Exploitation Frameworks",
                    "Containerized Environment",
                ],
                "https://github.com/Prathameshpendkar2005",
                true,
            ),
        ]
    }

    fn builtin_skills() -> Vec<SkillCategory> {
        vec![
            SkillCategory::new(
                "cloud-security",
                "Cloud Security",
                "Cloud",
                &[
                    ("AWS", "Cloud", "https://en.wikipedia.org/wiki/Amazon_Web_Services"),
                    ("EC2", "Server", "https://en.wikipedia.org/wiki/Amazon_Elastic_Compute_Cloud"),
                    ("S3", "Database", "https://en.wikipedia.org/wiki/Amazon_S3"),
                    ("IAM", "UserCheck", "https://en.wikipedia.org/wiki/AWS_Identity_and_Access_Management"),
                    ("VPC", "Network", "https://en.wikipedia.org/wiki/Amazon_Virtual_Private_Cloud"),
                    ("CloudFront", "Network", "https://en.wikipedia.org/wiki/Amazon_CloudFront"),
                    ("Azure Cloud", "Cloud", "https://en.wikipedia.org/wiki/Microsoft_Azure"),
                    ("Google Cloud Platform", "Cloud", "https://en.wikipedia.org/wiki/Google_Cloud_Platform"),
                    ("WAF", "Shield", "https://en.wikipedia.org/wiki/Web_application_firewall"),
                ],
            ),
            SkillCategory::new(
                "vapt-tools",
                "VAPT Tools",
                "Search",
                &[
                    ("Nmap", "Search", "https://en.wikipedia.org/wiki/Nmap"),
                    ("Naabu", "Network", "https://en.wikipedia.org/wiki/Port_scanner"),
                    ("Burp Suite", "Bug", "https://en.wikipedia.org/wiki/Burp_Suite"),
                    ("OWASP ZAP", "Shield", "https://en.wikipedia.org/wiki/OWASP_ZAP"),
                    ("SQLMap", "Database", "https://en.wikipedia.org/wiki/Sqlmap"),
                    ("Nikto", "Search", "https://en.wikipedia.org/wiki/Nikto_(vulnerability_scanner)"),
                    ("Kali Linux", "Terminal", "https://en.wikipedia.org/wiki/Kali_Linux"),
                    ("Metasploit", "Bug", "https://en.wikipedia.org/wiki/Metasploit"),
                ],
            ),
            SkillCategory::new(
                "soc-siem",
                "SOC / SIEM",
                "Monitor",
                &[
                    ("Elasticsearch", "Database", "https://en.wikipedia.org/wiki/Elasticsearch"),
                    ("Logstash", "Settings", "https://en.wikipedia.org/wiki/Logstash"),
                    ("Kibana", "BarChart", "https://en.wikipedia.org/wiki/Kibana"),
                    ("Wazuh SIEM", "Shield", "https://en.wikipedia.org/wiki/Wazuh"),
                    ("Microsoft Sentinel", "Monitor", "https://en.wikipedia.org/wiki/Microsoft_Sentinel"),
                    ("Zabbix Monitoring", "Monitor", "https://en.wikipedia.org/wiki/Zabbix"),
                    ("Prometheus", "BarChart", "https://en.wikipedia.org/wiki/Prometheus_(software)"),
                    ("Splunk", "Database", "https://en.wikipedia.org/wiki/Splunk"),
                    ("Fleet Server", "Server", "https://en.wikipedia.org/wiki/Elastic_Stack"),
                    ("Grafana", "BarChart", "https://en.wikipedia.org/wiki/Grafana"),
                ],
            ),
            SkillCategory::new(
                "devops-automation",
                "DevOps & Automation",
                "Settings",
                &[
                    ("Docker", "Container", "https://en.wikipedia.org/wiki/Docker_(software)"),
                    ("Kubernetes", "Layers", "https://en.wikipedia.org/wiki/Kubernetes"),
                    ("Python", "Code", "https://en.wikipedia.org/wiki/Python_(programming_language)"),
                    ("Bash", "Terminal", "https://en.wikipedia.org/wiki/Bash_(Unix_shell)"),
                    ("Git", "GitBranch", "https://en.wikipedia.org/wiki/Git"),
                    ("Terraform", "Settings", "https://en.wikipedia.org/wiki/Terraform_(software)"),
                    ("Ansible", "Settings", "https://en.wikipedia.org/wiki/Ansible_(software)"),
                    ("Infrastructure as Code", "Code", "https://en.wikipedia.org/wiki/Infrastructure_as_code"),
                ],
            ),
        ]
    }

    fn builtin_certifications() -> Vec<Certification> {
        vec![
            Certification::new(
                "aws-solutions-architect",
                "AWS Certified Solutions Architect - Associate",
                "Amazon Web Services (AWS Official)",
                "2028",
                "Cloud Architecture & AWS Solutions Design",
                "Certified - Valid until 2028",
                "bg-blue-600 text-white",
                "Cloud",
            ),
            Certification::new(
                "tenet-ctf",
                "TENET CTF 2025 - Capture The Flag",
                "AISSMS IOIT & ACM India",
                "2025",
                "Ranked 11th in high-intensity cybersecurity CTF competition covering Reverse \
                 Engineering, Web Exploitation, Cryptography, Network Analysis, and Digital \
                 Forensics",
                "Achieved 11th Position - Oct 2025",
                "bg-red-600 text-white",
                "Target",
            ),
            Certification::new(
                "web3-hackathon",
                "Web3 Hackathon - TantraFiesta'25",
                "IIIT Nagpur & Unstop",
                "2025",
                "Certificate of Participation - DecentraShield Project (DeFAI Track)",
                "Participant - Nov 2025",
                "bg-purple-600 text-white",
                "Zap",
            ),
            Certification::new(
                "aws-cert",
                "AWS Cloud Certification",
                "SevenMentor",
                "2025",
                "Cloud Security & Infrastructure",
                "Completed - Sep 2025",
                "bg-green-600 text-white",
                "Cloud",
            ),
            Certification::new(
                "comptia-pentest",
                "CompTIA PenTest+",
                "Udemy",
                "In Progress",
                "Penetration Testing & Vulnerability Assessment",
                "In Progress",
                "bg-accent text-background",
                "UserCheck",
            ),
            Certification::new(
                "dfe-cert",
                "Digital Forensics Essentials (DFE)",
                "EC-Council",
                "March 2023",
                "Digital Forensics & Incident Response",
                "Certified",
                "bg-neon text-background",
                "Search",
            ),
        ]
    }

    fn builtin_experience() -> Vec<Experience> {
        vec![
            Experience::new(
                "imperative",
                "Cybersecurity Intern",
                "Imperative (Cyber Secured India)",
                "Aug 2025 - Nov 2025",
                &[
                    "SOC/NOC Lab Deployment: Built modular ELK + Wazuh + Zabbix stack using \
                     Docker with static IPs",
                    "Health Check Automation: Scripted health checks for Elasticsearch, Kibana, \
                     Fleet Server, and Zabbix agents",
                    "Remote Infrastructure: Validated uptime across Docker containers, connected \
                     to Thane office via VPN",
                ],
            ),
            Experience::new(
                "bloggerscon",
                "Security Analyst Intern",
                "Bloggerscon Vision Pvt. Ltd",
                "Feb 2025 - Aug 2025",
                &[
                    "Found 5-8 bugs: XSS, IDOR, CSRF, Open Redirect",
                    "Recon Automation: 40% speed improvement",
                    "Subdomain Enumeration: 500+ endpoints",
                    "Delivered 20+ PoC reports with VRT mapping",
                ],
            ),
            Experience::new(
                "hacktify",
                "Cybersecurity Intern",
                "Hacktify Cyber Security",
                "Feb 2025 - Mar 2025",
                &[
                    "Bug Bounty VAPT: Found 5-7 web app vulnerabilities (XSS, SQLi, IDOR, CSRF, \
                     Broken Auth)",
                    "Hacktify CTF: Solved 5 exploitation challenges, simulating real-world \
                     bounty tasks",
                ],
            ),
            Experience::new(
                "cybersec-corp",
                "Digital Forensics Intern",
                "Cybersecurity Corporation",
                "Jun 2024 - Aug 2024",
                &[
                    "Forensics: 10+ disk imaging cases with Autopsy",
                    "Incident Response: 5+ investigations supported",
                    "TSCM: 35% detection accuracy improvement",
                    "Reporting: 25% faster incident resolution",
                ],
            ),
            Experience::new(
                "arapl",
                "Vulnerability Management Analyst",
                "ARAPL, Pune",
                "Jun 2023 - Aug 2023",
                &[
                    "Lab Setup: Simulated 5 vulnerabilities using DVWA, Juice Shop, WebGoat",
                    "Vulnerability Scanning: Detected 30+ issues with OWASP ZAP",
                    "Reporting: Improved dev patch adoption by 20%",
                ],
            ),
        ]
    }

    fn builtin_gallery() -> Vec<GalleryItem> {
        vec![
            GalleryItem::new(
                "tenet-ctf-certificate",
                "TENET CTF 2025 - 11th Position Achievement",
                "Certificate of Appreciation from AISSMS IOIT for participating in TENET CTF \
                 2025 (Capture The Flag) competition held on 12th October 2025. Achieved 11th \
                 position among competitive cybersecurity enthusiasts. Demonstrated expertise \
                 in Reverse Engineering, Web Exploitation, Cryptography, Network Analysis, and \
                 Digital Forensics. Strengthened Red Team mindset, enhanced VAPT skills, and \
                 reinforced critical thinking in cybersecurity.",
                "@assets/Aissms.png",
                "achievement",
                "October 2025",
            ),
            GalleryItem::new(
                "web3-hackathon-certificate",
                "TantraFiesta'25 Web3 Hackathon - DecentraShield",
                "Certificate of Participation from IIIT Nagpur's TantraFiesta'25 Web3 \
                 Hackathon for DecentraShield project (DeFAI Track). Team: Prathamesh Pendkar, \
                 Anisha Miranda, Arya Deshpande, Abhijit Avhad. AI-powered decentralized \
                 security framework for digital identities and DeFi.",
                "@assets/unstop_web3.jpeg",
                "achievement",
                "November 2025",
            ),
            GalleryItem::new(
                "aws-solutions-architect-badge",
                "AWS Certified Solutions Architect - Associate Badge",
                "Official AWS certification badge for Solutions Architect - Associate level, \
                 validating expertise in AWS cloud architecture and solutions design. \
                 Credential valid through 2028.",
                "@assets/aws-certified-solutions-architect-associate.png",
                "certificate",
                "2025",
            ),
            GalleryItem::new(
                "team-photo",
                "Professional Team Collaboration",
                "Working with cybersecurity professionals and colleagues during internship \
                 experience",
                "@assets/WhatsApp Image 2024-08-07 at 21.11.15_3b95bb5b_1756967707430.jpg",
                "team",
                "August 2024",
            ),
            GalleryItem::new(
                "arapl-certificate",
                "ARAPL Vulnerability Management Certificate",
                "Certificate from ARAPL for completion of vulnerability management and \
                 penetration testing internship program",
                "@assets/ARAPL_1756967719523.jpg",
                "certificate",
                "September 2023",
            ),
            GalleryItem::new(
                "techblue-certificate",
                "TechBlue Technology Workshop Certificate",
                "Certificate of participation for 2-day TechBlue Technology Workshop on volume \
                 forecasting and database security",
                "@assets/image_1756967840745.png",
                "certificate",
                "2023",
            ),
            GalleryItem::new(
                "digital-forensics-certificate",
                "Digital Forensics Essentials (DFE) - EC-Council",
                "EC-Council certified Digital Forensics Essentials course completion \
                 certificate - enhancing incident response capabilities",
                "@assets/Digital_forensics_essentials_1756967862712.png",
                "certificate",
                "June 2024",
            ),
            GalleryItem::new(
                "bloggerscon-certificate",
                "BloggersCon Security Analyst Internship",
                "Certificate of completion for Security Analyst Internship at BloggersCon \
                 Vision Pvt Ltd, focusing on bug bounty and VAPT",
                "@assets/Prathamesh_Pendkar_1756967941797.png",
                "certificate",
                "August 2025",
            ),
            GalleryItem::new(
                "aws-certificate",
                "AWS Certificate",
                "AWS Cloud Certification from SevenMentor - Comprehensive training covering \
                 core AWS services, security, architecture, and billing",
                "@assets/Screenshot 2025-09-13 192405_1757777883128.png",
                "certificate",
                "Sep 2025",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_collections_non_empty() {
        let catalog = Catalog::builtin();
        assert!(!catalog.projects.is_empty());
        assert!(!catalog.skills.is_empty());
        assert!(!catalog.certifications.is_empty());
        assert!(!catalog.experience.is_empty());
        assert!(!catalog.gallery.is_empty());
    }

    #[test]
    fn test_builtin_order_is_stable() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert_eq!(a, b);
        assert_eq!(a.projects[0].id, "iot-compliance-scanner");
        assert_eq!(a.experience[0].id, "imperative");
    }

    #[test]
    fn test_featured_projects_marked() {
        let catalog = Catalog::builtin();
        let featured: Vec<&str> = catalog
            .projects
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(
            featured,
            vec![
                "aws-security",
                "recon-automation",
                "tscm-design",
                "vulnerability-lab"
            ]
        );
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog.projects[0]).unwrap();

        assert!(json.get("githubUrl").is_some());
        assert!(json.get("github_url").is_none());
        assert_eq!(json["id"], "iot-compliance-scanner");
    }

    #[test]
    fn test_skill_tool_serializes_camel_case() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog.skills[0].tools[0]).unwrap();
        assert!(json.get("wikipediaUrl").is_some());
    }

    #[test]
    fn test_certification_serializes_camel_case() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog.certifications[0]).unwrap();
        assert!(json.get("statusColor").is_some());
    }

    #[test]
    fn test_gallery_item_serializes_camel_case() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog.gallery[0]).unwrap();
        assert!(json.get("imagePath").is_some());
    }

    #[test]
    fn test_roundtrip_deserialization() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
