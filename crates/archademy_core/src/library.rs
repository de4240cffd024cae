//! Bundled lesson library
//!
//! Complete authored lesson content for every architecture on the roadmap,
//! so the course works offline and sources that synthesize lessons have a
//! fallback. Content lives here as plain constructors rather than on disk;
//! the records are identical in shape to what an external source produces.

use crate::curriculum::{Architecture, Lesson, LessonComponents};

/// The lesson shown before any source has been asked for anything
pub fn initial_lesson() -> Lesson {
    rule_based()
}

/// Authored lesson content for the given architecture
pub fn lesson_for(architecture: Architecture) -> Lesson {
    match architecture {
        Architecture::RuleBased => rule_based(),
        Architecture::ClassicalMl => classical_ml(),
        Architecture::DeepLearning => deep_learning(),
        Architecture::Transformer => transformer(),
        Architecture::Rag => rag(),
        Architecture::AgentBased => agent_based(),
        Architecture::MultiAgent => multi_agent(),
        Architecture::ToolUsing => tool_using(),
        Architecture::AutonomousWorkflows => autonomous_workflows(),
        Architecture::ProductArchitecture => product_architecture(),
    }
}

fn rule_based() -> Lesson {
    Lesson {
        id: Architecture::RuleBased,
        title: "1. Rule-Based Systems".to_string(),
        problem: "Deterministic automation where the rules of logic are known and rigid. \
                  For example, a banking system calculating interest rates based on account \
                  balance and tenure. There's no 'guessing' involved—if X is true, then Y \
                  must happen."
            .to_string(),
        diagram_description: "Imagine a flow-chart. Data enters at the top. It hits a series \
                              of 'If-Then' gates. Depending on the answer, it moves to the \
                              next gate or triggers a final action. It's a linear, branching \
                              path with 100% predictable outcomes."
            .to_string(),
        components: LessonComponents {
            model: "A set of explicit 'IF-THEN' statements stored in a Knowledge Base."
                .to_string(),
            data_flow: "Input -> Boolean Check -> Triggered Action. No feedback loops."
                .to_string(),
            memory: "Static. The system only knows the rules it was manually given. It \
                     doesn't 'learn' from previous inputs."
                .to_string(),
            orchestration: "Hard-coded logic or a simple Rule Engine (like Drools or nested \
                            if-else blocks)."
                .to_string(),
        },
        previous_difference: "This is the baseline. Before this, systems were manual. This \
                              introduced automated logic."
            .to_string(),
        current_use_cases: vec![
            "Tax preparation software (TurboTax)".to_string(),
            "Industrial safety shut-off systems".to_string(),
            "Basic thermostat controls".to_string(),
            "Legacy game AI (Pac-Man ghost behaviors)".to_string(),
        ],
        analogy: "A physical recipe book. If you have eggs, then boil them. If you have \
                  flour, then bake it. If you have both, make a cake. The book never learns \
                  a new recipe unless a human writes it in."
            .to_string(),
        when_not_to_use: "When patterns are fuzzy, data is noisy, or there are too many edge \
                          cases to manually code (e.g., identifying if a photo contains a cat)."
            .to_string(),
        python_snippet: r#"def calculate_discount(order_amount, is_premium_member):
    # This is a classic Rule-Based system logic
    if is_premium_member:
        if order_amount > 500:
            return 0.20 # 20% discount
        else:
            return 0.10 # 10% discount
    else:
        if order_amount > 1000:
            return 0.05 # 5% discount
        else:
            return 0.00 # No discount

# Predictable, explicit, and rigid."#
            .to_string(),
    }
}

fn classical_ml() -> Lesson {
    Lesson {
        id: Architecture::ClassicalMl,
        title: "2. Classical ML Pipelines".to_string(),
        problem: "Decisions where the rules are too fuzzy or numerous to write by hand, but \
                  the signal hides in historical examples. Think of scoring a loan \
                  application: hundreds of weak hints, no single 'if' that settles it. The \
                  system learns the boundary from labeled data instead of being told."
            .to_string(),
        diagram_description: "Picture a conveyor belt. Raw records enter on the left, pass a \
                              cleaning station, then a feature extractor that turns each \
                              record into a row of numbers, then a trained model that stamps \
                              each row with a score. Training is a separate loop feeding the \
                              stamp machine before the belt ever runs."
            .to_string(),
        components: LessonComponents {
            model: "A fitted statistical estimator (logistic regression, gradient-boosted \
                    trees) whose parameters were learned from labeled rows."
                .to_string(),
            data_flow: "Raw data -> Cleaning -> Feature vector -> Model -> Score. Training \
                        and serving are two distinct paths through the same steps."
                .to_string(),
            memory: "The learned weights. Frozen after training; the pipeline only changes \
                     when someone retrains and redeploys it."
                .to_string(),
            orchestration: "A pipeline runner (scikit-learn Pipeline, Spark job, cron-driven \
                            retraining) that keeps the stages in order."
                .to_string(),
        },
        previous_difference: "Rules were hand-written before. Here the machine derives its \
                              own internal thresholds from examples; humans curate data \
                              instead of writing logic."
            .to_string(),
        current_use_cases: vec![
            "Credit scoring and fraud flags".to_string(),
            "Email spam filtering".to_string(),
            "Churn prediction dashboards".to_string(),
            "Demand forecasting for inventory".to_string(),
        ],
        analogy: "An experienced customs officer. Nobody gave them a rulebook for 'suspicious \
                  luggage'; years of examples tuned their instincts. Show them a new bag and \
                  they produce a score, not an explanation."
            .to_string(),
        when_not_to_use: "When you have almost no labeled history, when inputs are raw \
                          perception (images, audio) that simple features can't capture, or \
                          when every decision must be explained line by line to a regulator."
            .to_string(),
        python_snippet: r#"from sklearn.pipeline import Pipeline
from sklearn.feature_extraction.text import TfidfVectorizer
from sklearn.linear_model import LogisticRegression

pipeline = Pipeline([
    ("features", TfidfVectorizer()),
    ("model", LogisticRegression()),
])

# The 'rules' are learned from labeled examples
pipeline.fit(train_texts, train_labels)
score = pipeline.predict_proba(["refund my order"])[0, 1]"#
            .to_string(),
    }
}

fn deep_learning() -> Lesson {
    Lesson {
        id: Architecture::DeepLearning,
        title: "3. Deep Learning Architectures".to_string(),
        problem: "Raw perception. A photo is a million pixels; no human can write features \
                  that say 'this is a cat'. Stacked layers learn their own features, each \
                  layer building on the one below, so the system can map raw signal straight \
                  to meaning."
            .to_string(),
        diagram_description: "Visualize a stack of translucent sheets. The image shines \
                              through the bottom sheet, which highlights edges. The next \
                              sheet combines edges into shapes, the next into ears and \
                              whiskers, until the top sheet lights up a single word: 'cat'. \
                              Learning is adjusting how strongly each sheet passes light."
            .to_string(),
        components: LessonComponents {
            model: "A deep neural network: layers of weighted connections trained end to \
                    end by backpropagation."
                .to_string(),
            data_flow: "Raw tensor -> Layer 1 -> Layer 2 -> ... -> Prediction, with \
                        gradients flowing backwards during training."
                .to_string(),
            memory: "Millions of learned weights. Still frozen at inference time; knowledge \
                     is baked into the network, not recalled from storage."
                .to_string(),
            orchestration: "A training loop on GPU clusters (PyTorch, TensorFlow) plus a \
                            serving runtime for the frozen network."
                .to_string(),
        },
        previous_difference: "Classical ML needed humans to design features. Deep learning \
                              learns the features themselves, trading interpretability and \
                              compute for raw perceptual power."
            .to_string(),
        current_use_cases: vec![
            "Face and object recognition".to_string(),
            "Speech-to-text transcription".to_string(),
            "Medical image screening".to_string(),
            "Recommendation ranking at scale".to_string(),
        ],
        analogy: "Teaching a child to recognize dogs. You never list 'four legs, wet nose'; \
                  you just point at dogs until the right inner wiring forms. Afterwards the \
                  child can't explain the rule either, but they are rarely wrong."
            .to_string(),
        when_not_to_use: "Small tabular datasets, tight compute budgets, or domains where \
                          you must show exactly why a decision was made. A hundred labeled \
                          rows will not feed a million weights."
            .to_string(),
        python_snippet: r#"import torch.nn as nn

# Each layer learns its own features from the raw pixels
model = nn.Sequential(
    nn.Conv2d(3, 16, kernel_size=3), nn.ReLU(),
    nn.MaxPool2d(2),
    nn.Conv2d(16, 32, kernel_size=3), nn.ReLU(),
    nn.Flatten(),
    nn.Linear(32 * 14 * 14, 2),  # cat / not-cat
)

logits = model(image_batch)"#
            .to_string(),
    }
}

fn transformer() -> Lesson {
    Lesson {
        id: Architecture::Transformer,
        title: "4. The Transformer Architecture".to_string(),
        problem: "Sequences where meaning depends on long-range context. In 'the animal \
                  didn't cross the street because it was tired', what is 'it'? Recurrent \
                  networks forgot; transformers let every token look directly at every other \
                  token and decide for itself what matters."
            .to_string(),
        diagram_description: "Picture a round table where every word of the sentence sits at \
                              once. Each word sends a question around the table ('who \
                              relates to me?'), weighs every answer, and rewrites itself as \
                              a blend of the words it attended to. Stack that table a few \
                              dozen layers high and the top row understands the sentence."
            .to_string(),
        components: LessonComponents {
            model: "Stacked self-attention and feed-forward blocks; queries, keys and \
                    values computed per token, per layer."
                .to_string(),
            data_flow: "Tokens -> Embeddings -> N attention blocks in parallel over the \
                        whole sequence -> Next-token distribution."
                .to_string(),
            memory: "A bounded context window. The model sees only the tokens handed to it \
                     in the prompt; nothing persists between calls."
                .to_string(),
            orchestration: "A single forward pass per generated token, batched and cached \
                            (KV cache) by the serving stack."
                .to_string(),
        },
        previous_difference: "Earlier deep networks processed sequences step by step and \
                              compressed history into one hidden state. Attention removes \
                              the bottleneck: all positions talk at once, which also makes \
                              training massively parallel."
            .to_string(),
        current_use_cases: vec![
            "Large language models (GPT, Claude, Gemini)".to_string(),
            "Machine translation".to_string(),
            "Code completion assistants".to_string(),
            "Protein structure prediction".to_string(),
        ],
        analogy: "A newsroom editing a story together. Every editor reads the whole draft, \
                  highlights the passages relevant to their own sentence, and rewrites it \
                  in light of what everyone else wrote. A few editing rounds later the \
                  story is coherent."
            .to_string(),
        when_not_to_use: "Tiny models on tiny devices, strict latency floors, or inputs far \
                          longer than any affordable context window. Attention cost grows \
                          fast with sequence length."
            .to_string(),
        python_snippet: r#"import torch, math

def attention(q, k, v):
    # Every token scores every other token
    scores = q @ k.transpose(-2, -1) / math.sqrt(q.size(-1))
    weights = torch.softmax(scores, dim=-1)
    # Each token becomes a weighted blend of the values
    return weights @ v

context = attention(queries, keys, values)"#
            .to_string(),
    }
}

fn rag() -> Lesson {
    Lesson {
        id: Architecture::Rag,
        title: "5. Retrieval-Augmented Generation (RAG)".to_string(),
        problem: "A language model only knows what it saw in training, and it will guess \
                  confidently when it doesn't. RAG bolts a library onto the model: fetch \
                  the relevant documents first, then let the model answer grounded in what \
                  was actually fetched."
            .to_string(),
        diagram_description: "Two boxes side by side. The question goes into a Retriever, \
                              which dives into a vector index and surfaces the five most \
                              similar passages. Question plus passages then flow into the \
                              Generator, which writes the answer while citing the passages. \
                              The index can be refreshed nightly without touching the model."
            .to_string(),
        components: LessonComponents {
            model: "Two of them: an embedding model that maps text to vectors, and a \
                    generative model that writes the final answer."
                .to_string(),
            data_flow: "Query -> Embed -> Nearest-neighbor search -> Top-k passages -> \
                        Prompt assembly -> Generation."
                .to_string(),
            memory: "External and editable: a vector database of document chunks. Update \
                     the documents and the system 'knows' new things immediately."
                .to_string(),
            orchestration: "A retrieval step chained before every generation call, plus an \
                            offline indexing pipeline."
                .to_string(),
        },
        previous_difference: "A plain transformer answers from frozen training data. RAG \
                              separates knowledge from reasoning: facts live in a store you \
                              control, and the model is just the writer."
            .to_string(),
        current_use_cases: vec![
            "Customer-support bots over product docs".to_string(),
            "Enterprise search with cited answers".to_string(),
            "Legal and medical research assistants".to_string(),
            "Internal wikis with a chat front end".to_string(),
        ],
        analogy: "An open-book exam. The student (the model) is smart but forgetful, so \
                  before answering each question they pull the three most relevant pages \
                  from the textbook and quote them. Better grades, and you can check the \
                  pages they used."
            .to_string(),
        when_not_to_use: "When answers need multi-step reasoning rather than lookup, when \
                          the corpus is tiny enough to fit in the prompt, or when retrieval \
                          latency breaks the experience."
            .to_string(),
        python_snippet: r#"query_vec = embedder.encode(question)

# Ground the model in retrieved facts, not vibes
passages = vector_index.search(query_vec, top_k=5)
context = "\n\n".join(p.text for p in passages)

prompt = f"Answer using only this context:\n{context}\n\nQ: {question}"
answer = llm.generate(prompt)"#
            .to_string(),
    }
}

fn agent_based() -> Lesson {
    Lesson {
        id: Architecture::AgentBased,
        title: "6. Agent-Based Architecture".to_string(),
        problem: "Tasks that take many steps and mid-course corrections: 'book me the \
                  cheapest trip that fits my calendar'. One model call can't do it. An \
                  agent loops: look at the situation, decide the next action, act, observe \
                  what happened, repeat until done."
            .to_string(),
        diagram_description: "Draw a circle, not a line. Goal enters the circle. The model \
                              reasons ('I should check the calendar first'), picks an \
                              action, the action runs, and its result is appended to a \
                              scratchpad that feeds the next turn of the circle. An exit \
                              gate checks after every lap whether the goal is met."
            .to_string(),
        components: LessonComponents {
            model: "A language model used as a decision-maker, prompted with the goal, the \
                    scratchpad so far, and the menu of available actions."
                .to_string(),
            data_flow: "Goal -> Reason -> Act -> Observe -> back to Reason. The loop ends \
                        on success, failure, or a step budget."
                .to_string(),
            memory: "A growing scratchpad of thoughts, actions and observations for this \
                     task; optionally a long-term store across tasks."
                .to_string(),
            orchestration: "An agent loop (the ReAct pattern) with stop conditions, retries \
                            and a hard cap on iterations."
                .to_string(),
        },
        previous_difference: "RAG reads before answering but still answers once. An agent \
                              acts, sees consequences, and re-plans; control flow is chosen \
                              by the model at run time instead of being fixed in code."
            .to_string(),
        current_use_cases: vec![
            "Coding assistants that edit, run tests, and fix".to_string(),
            "Travel and scheduling copilots".to_string(),
            "Data-analysis agents over notebooks".to_string(),
            "Automated web research and form filling".to_string(),
        ],
        analogy: "A junior employee with a checklist and a phone. You give them a goal, not \
                  instructions. They try something, see what happens, cross items off, and \
                  call someone when stuck. You cap how long they may spend before reporting \
                  back."
            .to_string(),
        when_not_to_use: "Single-shot tasks a plain prompt already solves, or high-stakes \
                          flows where an unsupervised loop could spend money or delete data. \
                          Loops amplify both capability and error."
            .to_string(),
        python_snippet: r#"scratchpad = []
for step in range(MAX_STEPS):
    decision = llm.decide(goal, scratchpad, tools.catalog())
    if decision.kind == "finish":
        break
    # Act, then feed the observation back into the loop
    observation = tools.run(decision.action, decision.args)
    scratchpad.append((decision, observation))"#
            .to_string(),
    }
}

fn multi_agent() -> Lesson {
    Lesson {
        id: Architecture::MultiAgent,
        title: "7. Multi-Agent Systems".to_string(),
        problem: "One agent wearing every hat gets confused: the prompt that makes a good \
                  planner makes a sloppy reviewer. Split the job across specialists that \
                  talk to each other: a planner, a coder, a critic, each with its own \
                  narrow prompt, sharing work over messages."
            .to_string(),
        diagram_description: "A small office floor plan. Each desk is an agent with a role \
                              sign: Planner, Researcher, Writer, Critic. Arrows between \
                              desks are messages. A task walks desk to desk, sometimes \
                              looping back when the Critic rejects a draft, until it \
                              reaches the Done tray."
            .to_string(),
        components: LessonComponents {
            model: "Several model instances, each with its own role prompt and often \
                    different sizes (small router, large writer)."
                .to_string(),
            data_flow: "Task -> Planner -> Worker(s) -> Critic -> either back to a Worker \
                        or out as the result. Messages are the only coupling."
                .to_string(),
            memory: "Per-agent scratchpads plus a shared message transcript or blackboard \
                     that everyone can read."
                .to_string(),
            orchestration: "A conversation manager that routes messages, enforces turn \
                            order, and kills runaway exchanges."
                .to_string(),
        },
        previous_difference: "A single agent chooses its next action alone. Here the \
                              structure adds peer review and specialization: quality comes \
                              from agents checking each other, not from one bigger prompt."
            .to_string(),
        current_use_cases: vec![
            "Software teams of planner/coder/reviewer agents".to_string(),
            "Simulated societies for social research".to_string(),
            "Adversarial red-team/blue-team evaluation".to_string(),
            "Complex document production with editor roles".to_string(),
        ],
        analogy: "A newsroom again, but now with job titles. The reporter drafts, the \
                  fact-checker pokes holes, the editor demands a rewrite. The paper is \
                  better than anything one person would ship alone, and also slower and \
                  pricier."
            .to_string(),
        when_not_to_use: "When a single competent agent suffices. Every extra agent \
                          multiplies token cost and adds a failure mode: agents agreeing \
                          with each other's mistakes in a polite loop."
            .to_string(),
        python_snippet: r#"planner = Agent(role="Break the task into steps")
coder   = Agent(role="Implement one step at a time")
critic  = Agent(role="Find bugs; reply APPROVE when clean")

plan = planner.ask(task)
for step in plan.steps:
    draft = coder.ask(step)
    while (review := critic.ask(draft)) != "APPROVE":
        draft = coder.ask(step, feedback=review)"#
            .to_string(),
    }
}

fn tool_using() -> Lesson {
    Lesson {
        id: Architecture::ToolUsing,
        title: "8. Tool-Using AI Systems".to_string(),
        problem: "Models can't check today's weather, query your database, or do exact \
                  arithmetic. Tool use gives the model a typed menu of functions; it \
                  replies with a structured call, your code executes it, and the result \
                  goes back into the conversation."
            .to_string(),
        diagram_description: "A socket panel. The model sits in the middle; around it, \
                              labeled sockets: 'search(query)', 'sql(statement)', \
                              'send_email(to, body)'. When the model needs the outside \
                              world it emits a plug that fits exactly one socket, the host \
                              plugs it in, and the current flows back."
            .to_string(),
        components: LessonComponents {
            model: "A function-calling model that can emit either prose or a JSON tool \
                    invocation matching a declared schema."
                .to_string(),
            data_flow: "Prompt + tool schemas -> Model -> Tool call -> Host executes -> \
                        Result appended -> Model continues."
                .to_string(),
            memory: "The conversation transcript, which now interleaves tool calls and \
                     their results."
                .to_string(),
            orchestration: "A dispatch layer that validates arguments against the schema, \
                            executes the function, and handles timeouts and errors."
                .to_string(),
        },
        previous_difference: "Agents decide 'what next'; tool use is the contract for 'how \
                              exactly'. Typed schemas replace free-text actions, which \
                              makes execution safe to automate."
            .to_string(),
        current_use_cases: vec![
            "Assistants that query live databases".to_string(),
            "Calendar and email automation".to_string(),
            "Calculators and code interpreters inside chats".to_string(),
            "Home automation voice control".to_string(),
        ],
        analogy: "A pilot and the cockpit. The pilot (model) doesn't flap wings; they \
                  operate named, well-specified controls. Every switch has a label, a \
                  range, and a checklist, which is exactly why a human (or autopilot) can \
                  trust the interaction."
            .to_string(),
        when_not_to_use: "Pure text tasks with nothing to execute, or environments where \
                          any side effect is unacceptable. Tools that mutate state need \
                          authorization layers that pure generation never did."
            .to_string(),
        python_snippet: r#"tools = [{
    "name": "get_weather",
    "parameters": {"city": "string"},
}]

reply = llm.chat(messages, tools=tools)
if reply.tool_call:
    # The model chose the socket; the host supplies the current
    result = dispatch(reply.tool_call.name, reply.tool_call.args)
    messages.append(tool_result(result))
    reply = llm.chat(messages, tools=tools)"#
            .to_string(),
    }
}

fn autonomous_workflows() -> Lesson {
    Lesson {
        id: Architecture::AutonomousWorkflows,
        title: "9. Autonomous AI Workflows".to_string(),
        problem: "Work that outlives a chat session: monitor the inbox, triage tickets \
                  nightly, keep a report current. Autonomous workflows run without a human \
                  pressing the button each time, driven by schedules and events, with \
                  checkpoints so a crash doesn't lose the plot."
            .to_string(),
        diagram_description: "A train timetable crossed with a flow-chart. Triggers on the \
                              left (timer ticks, webhooks, a new row in a table) launch \
                              runs down a track of stages. Each stage persists its output \
                              before the next begins; side rails lead to human-approval \
                              platforms where a person must wave the train through."
            .to_string(),
        components: LessonComponents {
            model: "Whatever each stage needs: an agent here, a single classification \
                    call there, plain code in between."
                .to_string(),
            data_flow: "Trigger -> Stage 1 -> checkpoint -> Stage 2 -> ... -> Output, with \
                        explicit retry and dead-letter paths."
                .to_string(),
            memory: "Durable run state in a store or queue; the workflow can resume mid \
                     flight after a restart."
                .to_string(),
            orchestration: "A workflow engine (Temporal, Airflow, a job queue) owning \
                            schedules, retries, timeouts and escalation to humans."
                .to_string(),
        },
        previous_difference: "Earlier architectures still waited for a user to ask. Here \
                              the trigger is a clock or an event, and reliability machinery \
                              (checkpoints, retries, approvals) becomes the core of the \
                              design rather than an afterthought."
            .to_string(),
        current_use_cases: vec![
            "Nightly ticket triage and routing".to_string(),
            "Continuous content moderation queues".to_string(),
            "Automated report generation and delivery".to_string(),
            "Pipelines that watch and summarize news feeds".to_string(),
        ],
        analogy: "A dishwasher, not a sous-chef. You load it, set the program, and walk \
                  away; it runs its cycle, stops on a jammed arm, and beeps for a human \
                  instead of flooding the kitchen."
            .to_string(),
        when_not_to_use: "Tasks needing human judgment at every step, or one-off jobs where \
                          building triggers, checkpoints and escalation costs more than \
                          doing the work by hand."
            .to_string(),
        python_snippet: r#"@workflow(trigger=schedule("0 7 * * *"))
def morning_triage(run):
    tickets = run.step(fetch_overnight_tickets)
    for t in tickets:
        label = run.step(classify, t)      # checkpointed
        if label.confidence < 0.8:
            run.escalate_to_human(t)       # approval gate
        else:
            run.step(route_ticket, t, label)"#
            .to_string(),
    }
}

fn product_architecture() -> Lesson {
    Lesson {
        id: Architecture::ProductArchitecture,
        title: "10. End-to-End AI Product Architecture".to_string(),
        problem: "Everything before this was a component. A product must survive real \
                  users: spiky traffic, bad inputs, model outages, cost ceilings, and the \
                  question 'is it actually getting better?'. The architecture here is the \
                  whole system around the model, not the model."
            .to_string(),
        diagram_description: "Concentric rings. The model sits in the small center circle. \
                              Around it: a serving ring (gateway, cache, rate limits, \
                              fallback models). Around that: a data ring (logs, feedback, \
                              eval sets). The outer ring is the loop: evaluations feed \
                              prompt and model changes, which roll out behind flags and \
                              A/B gates back into the center."
            .to_string(),
        components: LessonComponents {
            model: "Interchangeable. Multiple models behind one interface, chosen per \
                    request by cost, latency and capability."
                .to_string(),
            data_flow: "User -> Gateway (auth, rate limit) -> Router -> Model/tools -> \
                        Guardrails -> User, with every hop logged for evaluation."
                .to_string(),
            memory: "Product state: user history, caches, eval datasets, and the feedback \
                     signals that drive the next iteration."
                .to_string(),
            orchestration: "Deployment machinery: feature flags, canary rollouts, A/B \
                            tests, dashboards, on-call alerts."
                .to_string(),
        },
        previous_difference: "Each earlier lesson optimized an inner loop. This one \
                              optimizes the outer loop: measurement, rollout and fallback. \
                              A mediocre model in a great harness beats the opposite."
            .to_string(),
        current_use_cases: vec![
            "Consumer chat assistants at scale".to_string(),
            "AI features embedded in SaaS products".to_string(),
            "Copilot surfaces inside IDEs and office suites".to_string(),
            "API platforms serving many downstream apps".to_string(),
        ],
        analogy: "A restaurant, not a recipe. The dish (model) matters, but the business \
                  lives or dies on the kitchen workflow, the supply chain, the health \
                  inspections, and whether regulars come back. Nobody reviews the stove."
            .to_string(),
        when_not_to_use: "Prototypes and internal demos. Shipping the full ring system \
                          before anyone wants the dish is the classic way to spend a year \
                          building guardrails around nothing."
            .to_string(),
        python_snippet: r#"@app.post("/chat")
def chat(req: ChatRequest):
    if cached := cache.get(req.fingerprint()):
        return cached
    model = router.pick(req)          # cost/latency aware
    try:
        out = model.generate(req.prompt, timeout=10)
    except ModelUnavailable:
        out = fallback_model.generate(req.prompt)
    out = guardrails.check(out)
    telemetry.log(req, out)           # feeds the eval loop
    return cache.put(req.fingerprint(), out)"#
            .to_string(),
    }
}
